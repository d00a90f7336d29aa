pub mod auth;
pub mod position;
pub mod snapshot;
pub mod status;

pub use auth::*;
pub use position::*;
pub use snapshot::*;
pub use status::*;
