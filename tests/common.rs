// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use pollguard::config::{Config, ConfigV1};
use pollguard::guard::RouteTable;
use pollguard::routes::create_router;
use pollguard::session::Session;
use pollguard::state::AppState;
use pollguard::verify::{create_verifier, Verifier};

pub fn load_test_config(yaml: &str) -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(yaml))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// Builds the full router plus the state behind it, so tests can put the
/// session into a known condition before sending requests.
pub fn build_app(config: ConfigV1) -> (Router, AppState) {
    let config = Arc::new(config);
    let verifier: Arc<dyn Verifier> = Arc::from(create_verifier(&config.verifier));
    let session = Session::new();
    let routes = Arc::new(RouteTable::new(&config.pages));

    let state = AppState {
        config,
        session,
        routes,
        verifier,
    };

    (create_router(state.clone()), state)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn post_empty(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}
