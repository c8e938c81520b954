pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use tower_http::cors::CorsLayer;

use crate::state::AppState;
use crate::tailoring::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/tailor", post(handlers::handle_tailor))
        .with_state(state)
}

/// Any origin, with credentials. The request origin is echoed back since a
/// wildcard is not allowed together with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
