mod common;

use axum::body::to_bytes;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{build_app, get, load_test_config, post_empty, post_json};
use pollguard::session::{resolve_initial_identity, Session};

const PLAIN_CONFIG: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
pages_dir: pages
pages:
  - path: /
    page: index.html
    policy: require-auth
verifier:
  type: plain
  name: "Test users"
  users:
    - email: eve@example.com
      password: secret
      user_name: Eve
logging:
  level: "debug"
  format: "json"
"#;

/// A successful login records the identity and reports it back.
#[tokio::test]
async fn test_login_success_updates_session() {
    let (app, state) = build_app(load_test_config(PLAIN_CONFIG));

    let request = post_json(
        "/login",
        json!({"email": "eve@example.com", "password": "secret"}),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let identity: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(identity["email"], "eve@example.com");
    assert_eq!(identity["name"], "Eve");

    assert!(state.session.is_authenticated());

    let response = app.oneshot(get("/session")).await.unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let info: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(info["authenticated"], true);
    assert_eq!(info["email"], "eve@example.com");
    assert_eq!(info["name"], "Eve");
}

/// Rejected credentials get a 401 and leave the session untouched.
#[tokio::test]
async fn test_login_failure_leaves_session_untouched() {
    let (app, state) = build_app(load_test_config(PLAIN_CONFIG));

    let request = post_json(
        "/login",
        json!({"email": "eve@example.com", "password": "wrong"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!state.session.is_authenticated());
}

/// Logout clears the session and can be repeated safely.
#[tokio::test]
async fn test_logout_is_idempotent() {
    let (app, state) = build_app(load_test_config(PLAIN_CONFIG));
    state.session.login("eve@example.com", "Eve");

    let response = app.clone().oneshot(post_empty("/logout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.session.is_authenticated());

    let response = app.oneshot(post_empty("/logout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.session.is_authenticated());
}

/// `GET /session` on a fresh app reports logged-out.
#[tokio::test]
async fn test_session_endpoint_when_logged_out() {
    let (app, _state) = build_app(load_test_config(PLAIN_CONFIG));

    let response = app.oneshot(get("/session")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let info: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(info["authenticated"], false);
    assert!(info.get("email").is_none());
}

/// The HTTP verifier drives the same flow through an upstream endpoint.
#[tokio::test]
async fn test_login_through_http_verifier() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"email": "eve@example.com", "name": "Eve"}"#)
        .create_async()
        .await;

    let config_yaml = format!(
        r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
pages_dir: pages
pages: []
verifier:
  type: http
  name: "Upstream"
  uri: {}/login
logging:
  level: "debug"
  format: "json"
"#,
        server.url()
    );

    let (app, state) = build_app(load_test_config(&config_yaml));

    let request = post_json(
        "/login",
        json!({"email": "eve@example.com", "password": "secret"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.session.is_authenticated());
    mock.assert_async().await;
}

/// An upstream 4xx surfaces as a 401 with no session change.
#[tokio::test]
async fn test_login_through_http_verifier_rejected() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(403)
        .create_async()
        .await;

    let config_yaml = format!(
        r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
pages_dir: pages
pages: []
verifier:
  type: http
  name: "Upstream"
  uri: {}/login
logging:
  level: "debug"
  format: "json"
"#,
        server.url()
    );

    let (app, state) = build_app(load_test_config(&config_yaml));

    let request = post_json(
        "/login",
        json!({"email": "eve@example.com", "password": "secret"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!state.session.is_authenticated());
}

fn bootstrap_config(whoami_uri: &str) -> String {
    format!(
        r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
pages_dir: pages
pages: []
verifier:
  type: plain
  name: "Test users"
  users: []
initial_fetch:
  uri: {}
logging:
  level: "debug"
  format: "json"
"#,
        whoami_uri
    )
}

/// The initial fetch restores an existing upstream session.
#[tokio::test]
async fn test_initial_fetch_restores_identity() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/whoami")
        .with_status(200)
        .with_body(r#"{"email": "eve@example.com", "name": "Eve"}"#)
        .create_async()
        .await;

    let config = load_test_config(&bootstrap_config(&format!("{}/whoami", server.url())));
    let session = Session::new();
    resolve_initial_identity(&config, &session).await;

    assert!(session.initial_fetch_done());
    assert!(session.is_authenticated());
}

/// A whoami 4xx means no upstream session: logged out, but fetched.
#[tokio::test]
async fn test_initial_fetch_with_no_upstream_session() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/whoami")
        .with_status(401)
        .create_async()
        .await;

    let config = load_test_config(&bootstrap_config(&format!("{}/whoami", server.url())));
    let session = Session::new();
    resolve_initial_identity(&config, &session).await;

    assert!(session.initial_fetch_done());
    assert!(!session.is_authenticated());
}

/// An unreachable whoami endpoint still completes the fetch.
#[tokio::test]
async fn test_initial_fetch_unreachable_endpoint() {
    let config = load_test_config(&bootstrap_config("http://127.0.0.1:1/whoami"));
    let session = Session::new();
    resolve_initial_identity(&config, &session).await;

    assert!(session.initial_fetch_done());
    assert!(!session.is_authenticated());
}

/// With no endpoint configured the fetch is trivially complete.
#[tokio::test]
async fn test_initial_fetch_without_endpoint() {
    let config = load_test_config(PLAIN_CONFIG);
    let session = Session::new();
    resolve_initial_identity(&config, &session).await;

    assert!(session.initial_fetch_done());
    assert!(!session.is_authenticated());
}
