use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::session::Identity;
use crate::verify::Verifier;

/// Config for the HTTP verifier: the upstream login endpoint.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct HttpVerifierConfig {
    /// A friendly name for logs.
    pub name: String,
    pub uri: String,
}

/// A verifier that forwards the submitted credentials to an upstream login
/// endpoint as JSON and reads the identity back from the response body.
pub struct HttpVerifier {
    pub config: HttpVerifierConfig,
    client: reqwest::Client,
}

impl HttpVerifier {
    pub fn new(config: &HttpVerifierConfig) -> Self {
        info!(
            "Creating HTTP verifier '{}' for endpoint '{}'",
            config.name, config.uri
        );
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Verifier for HttpVerifier {
    fn get_name(&self) -> &str {
        &self.config.name
    }

    /// Sends `{email, password}` to the upstream endpoint. A 2xx response
    /// yields the identity; a 4xx means the credentials were rejected and
    /// produces a diagnostic only. No retry on any outcome.
    async fn verify(&self, email: &str, password: &str) -> Result<Identity, String> {
        debug!("Sending login request to: {}", self.config.uri);
        let response = self
            .client
            .post(&self.config.uri)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| format!("Error sending login request: {}", e))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| format!("Error reading login response body: {}", e))?;
            let user_info: Value = serde_json::from_str(&body)
                .map_err(|e| format!("Error parsing login response JSON: {}", e))?;

            // The upstream echoes the identity; fall back to the submitted
            // email when a field is missing so the identity stays complete.
            let email = user_info["email"].as_str().unwrap_or(email).to_string();
            let name = user_info["name"].as_str().unwrap_or(&email).to_string();
            Ok(Identity::new(email, name))
        } else if status.is_client_error() {
            warn!("Email or password incorrect (upstream returned {})", status);
            Err("email or password incorrect".to_string())
        } else {
            Err(format!("Login endpoint returned status: {}", status))
        }
    }
}
