//! Session endpoint handlers: login, logout, and session inspection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(current_session))
}

/// The login submission body.
#[derive(Deserialize, JsonSchema, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// What `GET /session` reports about the current session.
#[derive(Serialize, Debug)]
struct SessionInfo {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Verifies the submitted credentials and records the resulting identity
/// in the session.
///
/// A rejected or failed verification leaves the session untouched and
/// returns 401; the reason is logged but not retried.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, HTTPError> {
    match state.verifier.verify(&body.email, &body.password).await {
        Ok(identity) => {
            info!("Login succeeded for '{}'", identity.email);
            state
                .session
                .login(identity.email.clone(), identity.name.clone());
            Ok((StatusCode::OK, Json(identity)))
        }
        Err(e) => {
            warn!(
                "Login failed for '{}' via verifier '{}': {}",
                body.email,
                state.verifier.get_name(),
                e
            );
            Err(HTTPError::new(StatusCode::UNAUTHORIZED, e))
        }
    }
}

/// Clears the session. Safe to call when already logged out.
async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.session.logout();
    (StatusCode::OK, "Logged out")
}

/// Reports whether the session holds an identity, and which.
async fn current_session(State(state): State<AppState>) -> impl IntoResponse {
    let identity = state.session.identity();
    Json(SessionInfo {
        authenticated: identity.is_some(),
        email: identity.as_ref().map(|i| i.email.clone()),
        name: identity.map(|i| i.name),
    })
}
