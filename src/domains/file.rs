//! A flat-file-backed implementation of the [`DomainStore`][super::DomainStore] trait.
//!
//! Each reload parses the whole backing file into a fresh [`DomainSet`] and
//! publishes it through an [`ArcSwap`], so concurrent `contains` calls are
//! lock-free and only ever see complete snapshots.

use crate::domains::set::DomainSet;
use crate::domains::DomainStore;
use crate::error::Error;
use arc_swap::ArcSwap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;

/// A file-backed allow-list store.
///
/// Created with an empty published snapshot; callers perform one
/// [`reload`][DomainStore::reload] before serving queries so the set
/// reflects the backing file from the start.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FileDomainStore {
    path: PathBuf,
    current: ArcSwap<DomainSet>,
}

impl FileDomainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: ArcSwap::from_pointee(DomainSet::default()),
        }
    }

    /// The currently-published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<DomainSet> {
        self.current.load_full()
    }
}

#[async_trait::async_trait]
impl DomainStore for FileDomainStore {
    async fn reload(&self) -> Result<(), Error> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                File::create(&self.path).await?;
                tracing::warn!(
                    "{} not found, created an empty file",
                    self.path.display()
                );
                return Ok(());
            }
            Err(err) => return Err(Error::IO(err)),
        };

        let fresh = DomainSet::from(contents.as_str());
        tracing::info!(
            "loaded {} domains from {}",
            fresh.len(),
            self.path.display()
        );
        self.current.store(Arc::new(fresh));
        Ok(())
    }

    fn contains(&self, domain: &str) -> bool {
        self.current.load().contains(domain)
    }
}
