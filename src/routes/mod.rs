//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! session management, health checks, and the guarded page fallback.

mod health_routes;
mod page_routes;
mod session_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// Session and health endpoints are explicit routes; every other path
/// falls through to the page handler, which resolves it against the
/// route table (or 404s), matching the original single-dispatch server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(session_routes::routes())
        .merge(health_routes::routes())
        .fallback(page_routes::serve_page)
        .with_state(state)
}
