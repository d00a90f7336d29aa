#![allow(dead_code)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::state::SnapshotStore;
use crate::api::BotApi;

/// The dashboard has always refreshed every 10 seconds.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Drives the dashboard's refresh cycle while the view is mounted.
///
/// Owns the ticker task: one fetch pair fires immediately on start, then
/// one per interval. Dropping the poller (or calling `stop`) cancels the
/// ticker, so nothing fires after the view is gone; fetches already in
/// flight settle against the store, which is harmless.
pub struct DataPoller {
    api: Arc<dyn BotApi>,
    store: SnapshotStore,
    paused: Arc<AtomicBool>,
    ticker: JoinHandle<()>,
}

impl DataPoller {
    pub fn start(api: Arc<dyn BotApi>, store: SnapshotStore, every: Duration) -> Self {
        let paused = Arc::new(AtomicBool::new(false));
        let ticker = tokio::spawn(run_ticker(
            api.clone(),
            store.clone(),
            paused.clone(),
            every,
        ));
        debug!("dashboard polling started, every {:?}", every);
        Self {
            api,
            store,
            paused,
            ticker,
        }
    }

    /// Ticks become no-ops until `resume`. Used while the dashboard is not
    /// being looked at.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
        debug!("dashboard polling paused");
    }

    /// Re-enable ticks and refresh the dashboard data right away rather
    /// than waiting out the current interval.
    pub fn resume(&self) {
        if self.paused.swap(false, Ordering::AcqRel) {
            debug!("dashboard polling resumed");
            tokio::spawn(fetch_dashboard_data(self.api.clone(), self.store.clone()));
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Single status fetch outside the tick cycle. The control action uses
    /// this after a successful start/stop.
    pub async fn refresh_status(&self) {
        fetch_bot_status(self.api.clone(), self.store.clone()).await;
    }

    /// Unmount: no tick fires after this returns.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for DataPoller {
    fn drop(&mut self) {
        self.ticker.abort();
        debug!("dashboard polling stopped");
    }
}

async fn run_ticker(
    api: Arc<dyn BotApi>,
    store: SnapshotStore,
    paused: Arc<AtomicBool>,
    every: Duration,
) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        if paused.load(Ordering::Acquire) {
            continue;
        }
        // Independent tasks so a slow or failing endpoint never holds the
        // other one up.
        tokio::spawn(fetch_dashboard_data(api.clone(), store.clone()));
        tokio::spawn(fetch_bot_status(api.clone(), store.clone()));
    }
}

pub(crate) async fn fetch_dashboard_data(api: Arc<dyn BotApi>, store: SnapshotStore) {
    match api.dashboard_data().await {
        Ok(snapshot) => store.set_dashboard(snapshot).await,
        Err(err) => {
            warn!("Помилка отримання даних: {err}");
            store.mark_dashboard_settled().await;
        }
    }
}

pub(crate) async fn fetch_bot_status(api: Arc<dyn BotApi>, store: SnapshotStore) {
    match api.bot_status().await {
        Ok(status) => store.set_status(status).await,
        Err(err) => warn!("Помилка отримання статусу бота: {err}"),
    }
}
