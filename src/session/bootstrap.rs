use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ConfigV1;
use crate::session::{Identity, Session};

/// One-shot startup check that resolves a pre-existing identity, if any.
///
/// Best effort: when a whoami endpoint is configured it is queried exactly
/// once, and any failure simply leaves the session logged out. Whatever the
/// outcome, the session is marked as fetched afterwards so the guard stops
/// treating auth state as indeterminate.
pub async fn resolve_initial_identity(config: &ConfigV1, session: &Session) {
    if let Some(fetch) = &config.initial_fetch {
        match query_whoami(&fetch.uri).await {
            Ok(Some(identity)) => {
                info!("Initial fetch resolved identity '{}'", identity.email);
                session.login(identity.email, identity.name);
            }
            Ok(None) => debug!("Initial fetch found no existing session"),
            Err(e) => warn!("Initial identity fetch failed: {}", e),
        }
    } else {
        debug!("No initial-fetch endpoint configured");
    }
    session.mark_initial_fetch_done();
}

/// Queries the whoami endpoint. A 2xx body holding `{email, name}` yields
/// an identity, a 4xx means no session exists upstream, anything else is
/// an error.
async fn query_whoami(uri: &str) -> Result<Option<Identity>, String> {
    debug!("Sending whoami request to: {}", uri);
    let response = reqwest::get(uri)
        .await
        .map_err(|e| format!("Error sending whoami request: {}", e))?;

    let status = response.status();
    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| format!("Error reading whoami response body: {}", e))?;
        let user_info: Value = serde_json::from_str(&body)
            .map_err(|e| format!("Error parsing whoami JSON: {}", e))?;

        let email = user_info["email"].as_str().unwrap_or_default().to_string();
        if email.is_empty() {
            return Err("whoami response is missing an email".to_string());
        }
        let name = user_info["name"].as_str().unwrap_or(&email).to_string();
        Ok(Some(Identity::new(email, name)))
    } else if status.is_client_error() {
        Ok(None)
    } else {
        Err(format!("Whoami endpoint returned status: {}", status))
    }
}
