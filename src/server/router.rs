use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};

use super::pokemons::pokemon_router;
use super::response::message;
use crate::store::Store;
use crate::types::DEFAULT_PER_PAGE;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Page size for list requests without a usable `per_page`.
    pub default_per_page: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

async fn index() -> impl IntoResponse {
    message("Hello, World!")
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", pokemon_router())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
