use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::guard::AuthPolicy;
use crate::verify::VerifierConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: the page table, verifier, and server settings.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    pub bind_address: String,
    /// Directory the page files are read from.
    pub pages_dir: String,
    pub pages: Vec<PageConfig>,
    pub verifier: VerifierConfig,
    /// Optional whoami endpoint queried once at startup to restore an
    /// existing session.
    #[serde(default)]
    pub initial_fetch: Option<InitialFetchConfig>,
    pub logging: LoggingConfig,
}

/// One entry of the page route table.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct PageConfig {
    pub path: String,
    /// File name under `pages_dir` served for this path.
    pub page: String,
    #[serde(default)]
    pub policy: AuthPolicy,
}

/// Endpoint for the one-time startup identity check.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct InitialFetchConfig {
    pub uri: String,
}

/// Load config from a YAML file named "config.yaml" in the current
/// directory, with POLLGUARD_-prefixed environment overrides.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("POLLGUARD_"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
