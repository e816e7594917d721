//! Periodic allow-list refresh.

use crate::domains::{DomainStore, SharedDomainStore};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A background task that re-reads the backing file on a fixed interval.
///
/// The task is fire-and-forget: it is never joined by the serving path and
/// runs until the process exits. A failed reload is logged and the previous
/// snapshot stays authoritative until the next tick.
pub struct ReloadTask {
    domains: SharedDomainStore,
    period: Duration,
}

impl ReloadTask {
    #[must_use]
    pub fn new(domains: SharedDomainStore, period: Duration) -> Self {
        Self { domains, period }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tracing::info!("reloading allow-list every {:?}", self.period);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            // The first tick completes immediately; startup already
            // performed the initial load.
            interval.tick().await;

            loop {
                interval.tick().await;
                if let Err(err) = self.domains.reload().await {
                    tracing::error!("allow-list reload failed: {err}");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::FileDomainStore;
    use std::sync::Arc;
    use tokio::time::sleep;

    #[tokio::test]
    async fn reload_task_picks_up_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domains.txt");
        tokio::fs::write(&path, "a.com\n").await.unwrap();

        let store = Arc::new(FileDomainStore::new(&path));
        store.reload().await.unwrap();
        assert!(store.contains("a.com"));

        tokio::fs::write(&path, "b.com\n").await.unwrap();
        let domains: SharedDomainStore = store.clone();
        ReloadTask::new(domains, Duration::from_millis(50)).spawn();

        sleep(Duration::from_millis(300)).await;

        assert!(store.contains("b.com"));
        assert!(!store.contains("a.com"));
    }

    #[tokio::test]
    async fn reload_task_survives_failed_ticks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("domains.txt");

        // The parent directory doesn't exist, so every tick fails with a
        // real IO error (not the handled not-found-and-create case).
        let store = Arc::new(FileDomainStore::new(&path));
        let domains: SharedDomainStore = store.clone();
        let handle = ReloadTask::new(domains, Duration::from_millis(50)).spawn();

        sleep(Duration::from_millis(300)).await;

        assert!(!handle.is_finished());
        assert!(store.snapshot().is_empty());
    }
}
