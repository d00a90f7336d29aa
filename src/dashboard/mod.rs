pub mod control;
pub mod poller;
pub mod state;
pub mod view;

pub use control::*;
pub use poller::*;
pub use state::*;
pub use view::*;
