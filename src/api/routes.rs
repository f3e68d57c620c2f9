//! Router assembly, grounded on the teacher's `create_v1_router`
//! composition style.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    compute_system_properties, create_reaction, delete_reaction, get_mechanism, get_reaction, health_check,
    AppState,
};
use super::middleware::request_id_middleware;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/reaction/:id", get(get_reaction).delete(delete_reaction))
        .route("/reaction", post(create_reaction))
        .route("/mechanism/:id", get(get_mechanism))
        .route("/system/properties", post(compute_system_properties))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
