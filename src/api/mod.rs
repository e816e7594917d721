//! HTTP API for querying allow-list membership.
//!
//! # API Endpoints
//!
//! ## `/check_domain` (GET)
//!
//!   Expects a `domain` query parameter naming the domain to test, e.g.:
//!
//!   ```bash
//!   ❯ curl 'http://127.0.0.1:8008/check_domain?domain=example.com'
//!   {"domain":"example.com","allowed":true}
//!   ```
//!
//!   Returns HTTP 200 (OK) when the domain is in the allow-list and
//!   HTTP 404 (Not Found) when it is not. The JSON response body has the
//!   same shape either way:
//!
//!   ```json
//!   { "domain": "example.com", "allowed": true }
//!   ```
//!
//!   Membership is an exact string match against the current allow-list
//!   snapshot. No case folding or other normalization is applied beyond
//!   standard URL query-string decoding.
//!
//!   Requests without a `domain` parameter (or with an empty one) receive
//!   HTTP 400 (Bad Request) and the body:
//!
//!   ```json
//!   { "error": "Domain parameter is required" }
//!   ```
//!
//! Any other path receives HTTP 404 (Not Found) with the plain text body
//! `Not Found`.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use routes::new as router;
pub use server::{new, AppState};
