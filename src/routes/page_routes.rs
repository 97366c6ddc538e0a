//! The guarded page fallback: resolves a request path against the route
//! table, runs the navigation guard, and serves the page file.

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, error};

use crate::guard::{evaluate, GuardDecision};
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Serves the page registered for the request path, if the guard allows it.
///
/// Unmatched paths get the fixed 404 body. A redirect decision becomes an
/// HTTP redirect: to the login page for unauthenticated access, back to
/// the index when an auth-exclusive page is entered while logged in.
pub async fn serve_page(State(state): State<AppState>, uri: Uri) -> Result<Response, HTTPError> {
    let Some(route) = state.routes.find(uri.path()) else {
        debug!("No route registered for path '{}'", uri.path());
        return Ok(not_found());
    };

    match evaluate(route.policy, &state.session.snapshot()) {
        GuardDecision::Allow => {
            let path = std::path::Path::new(&state.config.pages_dir).join(&route.page);
            let contents = tokio::fs::read(&path).await.map_err(|e| {
                error!("Failed to read page file '{}': {}", path.display(), e);
                HTTPError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to read page '{}'", route.page),
                )
            })?;
            Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "text/html")
                .body(Body::from(contents))
                .map_err(|e| HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
        GuardDecision::RedirectToLogin => {
            debug!("Redirecting unauthenticated request for '{}' to login", route.path);
            Ok(Redirect::to("/login").into_response())
        }
        GuardDecision::Deny => {
            debug!("Denying entry to auth-exclusive page '{}'", route.path);
            Ok(Redirect::to("/").into_response())
        }
    }
}

fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(Body::from("Page does not exist"))
        .unwrap()
}
