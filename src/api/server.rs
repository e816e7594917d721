use crate::api::routes;
use crate::config::Shared;
use crate::domains::SharedDomainStore;
use std::future::Future;

#[derive(Clone)]
pub struct AppState {
    pub config: Shared,
    pub domains: SharedDomainStore,
}

pub fn new(config: Shared, domains: SharedDomainStore) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.api_bind_addr)
        .serve(routes::new(AppState { config, domains }).into_make_service())
}
