//! Allow-list storage.
//!
//! The allow-list is a set of exact-match domain strings sourced from a flat
//! text file (one domain per line, blank lines ignored, per-line whitespace
//! trimmed). Queries never observe a half-built set: each reload parses a
//! fresh [`DomainSet`] snapshot and publishes it with a single atomic pointer
//! swap, so readers see either the pre-reload or post-reload snapshot in its
//! entirety.
//!
//! [`file::FileDomainStore`] is the production implementation. It keeps the
//! previously published snapshot authoritative when a reload fails, and
//! treats a missing backing file as an empty allow-list rather than an error.

use crate::error::Error;
use std::sync::Arc;

pub mod file;
pub mod set;

#[allow(clippy::module_name_repetitions)]
pub use file::FileDomainStore;
#[allow(clippy::module_name_repetitions)]
pub use set::DomainSet;

/// `SharedDomainStore` is a type alias for a [`DomainStore`] shared between
/// the request-handling context and the background reload task through an
/// [`Arc`]. The store synchronizes internally; readers never take a lock.
#[allow(clippy::module_name_repetitions)]
pub type SharedDomainStore = Arc<dyn DomainStore + Send + Sync>;

/// An async trait describing the allow-list store: a periodically refreshed,
/// concurrently queried set of exact-match domain strings.
#[async_trait::async_trait]
pub trait DomainStore {
    /// Re-read the backing source and atomically publish a fresh snapshot.
    ///
    /// A missing backing file is not an error: the file is created empty and
    /// the currently-published snapshot is left in place. Any other failure
    /// is returned to the caller and the current snapshot stays
    /// authoritative.
    async fn reload(&self) -> Result<(), Error>;

    /// Exact string membership test against the currently-published snapshot.
    fn contains(&self, domain: &str) -> bool;
}
