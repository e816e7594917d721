//! Domain Gate
//!
//! A minimal HTTP lookup service answering whether a domain name is present
//! in an allow-list.
//!
//! The allow-list is sourced from a flat text file (one domain per line) and
//! refreshed in the background on a fixed interval, so edits to the file are
//! picked up without restarting the service. Each refresh publishes a
//! complete immutable snapshot with an atomic pointer swap; queries are
//! lock-free and never observe a partially-updated set.
//!
//! Membership is exact-string only. See the [HTTP API][crate::api] docs for
//! the query endpoint contract.
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod domains;
pub mod error;
pub mod reload;

pub use api::new as new_http;
pub use config::{Config, Shared};
pub use domains::{DomainSet, DomainStore, FileDomainStore, SharedDomainStore};
pub use reload::ReloadTask;
