use crate::api::api_error::APIError;
use crate::api::model::{CheckDomainParams, CheckDomainResult};
use crate::api::server::AppState;
use crate::domains::DomainStore;
use crate::error::Error;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn new(state: AppState) -> Router {
    Router::new()
        .route("/check_domain", get(check_domain))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

async fn check_domain(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<CheckDomainParams>, APIError>,
) -> Result<impl IntoResponse, APIError> {
    let domain = match params.domain {
        Some(domain) if !domain.is_empty() => domain,
        _ => {
            tracing::warn!("400 Bad Request: missing domain parameter");
            return Err(Error::MissingDomainParam.into());
        }
    };

    let allowed = state.domains.contains(&domain);
    tracing::info!("domain query: {domain}, allowed: {allowed}");

    let status = if allowed {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(CheckDomainResult { domain, allowed })))
}

#[allow(clippy::unused_async)]
async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!("404 Not Found: {uri}");
    (StatusCode::NOT_FOUND, "Not Found")
}
