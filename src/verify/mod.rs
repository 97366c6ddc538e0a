//! Credential verification for login submissions.
//!
//! Mirrors a provider-chain layout: a `Verifier` trait, concrete
//! implementations, and a factory that builds one from configuration.

pub mod base;
pub mod http_verifier;
pub mod plain_verifier;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use base::Verifier;
pub use http_verifier::{HttpVerifier, HttpVerifierConfig};
pub use plain_verifier::{PlainVerifier, PlainVerifierConfig};

/// Configuration options for each verifier kind.
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
#[serde(tag = "type")]
pub enum VerifierConfig {
    #[serde(rename = "http")]
    HttpVerifierConfig(HttpVerifierConfig),

    #[serde(rename = "plain")]
    PlainVerifierConfig(PlainVerifierConfig),
}

/// Create a credential verifier from a given config.
pub fn create_verifier(config: &VerifierConfig) -> Box<dyn Verifier> {
    match config {
        VerifierConfig::HttpVerifierConfig(cfg) => Box::new(HttpVerifier::new(cfg)),
        VerifierConfig::PlainVerifierConfig(cfg) => Box::new(PlainVerifier::new(cfg)),
    }
}
