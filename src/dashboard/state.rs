#![allow(dead_code)]
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::types::{BotStatus, DashboardSnapshot};

/// Fired after a fetch settles so the render loop can redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    Dashboard,
    Status,
}

/// Latest data the mounted dashboard has seen. Snapshots are replaced
/// wholesale; the two endpoints update independently of each other.
#[derive(Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<LatestData>>,
    pub tx: broadcast::Sender<RefreshEvent>,
}

#[derive(Debug, Clone, Default)]
struct LatestData {
    dashboard: Option<DashboardSnapshot>,
    status: Option<BotStatus>,
    refreshed_at: Option<DateTime<Utc>>,
    // True once the first dashboard-data fetch has settled, success or
    // failure. Gates the initial loading screen.
    settled: bool,
}

/// Everything the renderer needs, read under one lock.
#[derive(Debug, Clone)]
pub struct ViewData {
    pub dashboard: Option<DashboardSnapshot>,
    pub status: Option<BotStatus>,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub settled: bool,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            inner: Arc::new(RwLock::new(LatestData::default())),
            tx,
        }
    }

    pub async fn set_dashboard(&self, snapshot: DashboardSnapshot) {
        let mut data = self.inner.write().await;
        data.dashboard = Some(snapshot);
        data.refreshed_at = Some(Utc::now());
        data.settled = true;
        let _ = self.tx.send(RefreshEvent::Dashboard);
    }

    pub async fn set_status(&self, status: BotStatus) {
        let mut data = self.inner.write().await;
        data.status = Some(status);
        data.refreshed_at = Some(Utc::now());
        let _ = self.tx.send(RefreshEvent::Status);
    }

    /// End the loading screen after a failed first fetch. Later failures
    /// change nothing.
    pub async fn mark_dashboard_settled(&self) {
        let mut data = self.inner.write().await;
        if !data.settled {
            data.settled = true;
            let _ = self.tx.send(RefreshEvent::Dashboard);
        }
    }

    pub async fn dashboard(&self) -> Option<DashboardSnapshot> {
        self.inner.read().await.dashboard.clone()
    }

    pub async fn status(&self) -> Option<BotStatus> {
        self.inner.read().await.status.clone()
    }

    pub async fn is_settled(&self) -> bool {
        self.inner.read().await.settled
    }

    pub async fn view_data(&self) -> ViewData {
        let data = self.inner.read().await;
        ViewData {
            dashboard: data.dashboard.clone(),
            status: data.status.clone(),
            refreshed_at: data.refreshed_at,
            settled: data.settled,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
