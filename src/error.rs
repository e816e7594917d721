//! Error types.

use axum::extract::rejection::QueryRejection;
use std::net::IpAddr;

/// Error enumerates the possible Domain Gate error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when clients `GET` the
    /// [`/check_domain` API endpoint][crate::api#check_domain-get] without a
    /// `domain` query parameter, or with an empty one.
    #[error("Domain parameter is required")]
    MissingDomainParam,

    /// Returned when the query string of a request can't be deserialized.
    #[error(transparent)]
    QueryExtractorRejection(#[from] QueryRejection),

    /// Returned when the [`Config::api_bind_addr`][`crate::config::Config::api_bind_addr`] is
    /// not a loopback address, or an address within a private network space. The
    /// [Domain Gate HTTP API][crate::api] is intended to sit behind whatever
    /// front-end terminates TLS and authenticates callers, never on a public
    /// interface.
    #[error("API bind address ({0}) must be a loopback or private IP")]
    InsecureAPIBind(IpAddr),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g.
    /// [trying to load a `Config`][crate::config::Config::try_from_file]) fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
