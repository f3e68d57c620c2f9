//! HTTP surface.

pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routes;

pub use handlers::AppState;
pub use routes::build_router;
