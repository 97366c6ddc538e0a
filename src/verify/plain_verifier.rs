use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::session::Identity;
use crate::verify::Verifier;

/// PlainVerifierConfig holds an in-memory user list, useful for local
/// development and tests where no upstream login endpoint exists.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct PlainVerifierConfig {
    /// A friendly name for logs.
    pub name: String,
    /// A list of accepted credentials and the display name each maps to.
    pub users: Vec<PlainUserEntry>,
}

/// A single configured user entry.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct PlainUserEntry {
    pub email: String,
    pub password: String,
    pub user_name: String,
}

/// A verifier that checks credentials against the configured user list.
pub struct PlainVerifier {
    pub config: PlainVerifierConfig,
}

impl PlainVerifier {
    pub fn new(config: &PlainVerifierConfig) -> Self {
        info!(
            "Creating plain verifier '{}' with {} user(s)",
            config.name,
            config.users.len()
        );
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait::async_trait]
impl Verifier for PlainVerifier {
    fn get_name(&self) -> &str {
        &self.config.name
    }

    async fn verify(&self, email: &str, password: &str) -> Result<Identity, String> {
        let matched = self
            .config
            .users
            .iter()
            .find(|user| user.email == email && user.password == password);

        match matched {
            Some(user) => Ok(Identity::new(user.email.clone(), user.user_name.clone())),
            None => {
                warn!("No configured user matched email '{}'", email);
                Err("email or password incorrect".to_string())
            }
        }
    }
}
