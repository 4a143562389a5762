use axum::{Router, routing::any};
use axum_extra::routing::TypedPath;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

mod routes;
pub mod server;

pub use routes::{HealthPath, health::HealthResponse};
pub use server::{LISTEN_ADDR, ServerError};

/// Builds the router serving `/health`. Every other path gets axum's default 404.
pub fn create_root_app() -> Router {
    Router::new()
        // any method is accepted on the health path
        .route(HealthPath::PATH, any(routes::health::health_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
