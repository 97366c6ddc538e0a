//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including the session bootstrap, route table construction, and route
//! setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::guard::RouteTable;
use crate::routes;
use crate::session::{resolve_initial_identity, Session};
use crate::state::AppState;
use crate::verify::{create_verifier, Verifier};

/// Initializes and runs the application server.
///
/// Builds the verifier and session, runs the one-time identity bootstrap
/// to completion, then binds to the configured address and starts serving.
/// The bootstrap finishing first means no request is ever answered while
/// auth state is still indeterminate.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let verifier: Arc<dyn Verifier> = Arc::from(create_verifier(&config.verifier));

    let session = Session::new();
    resolve_initial_identity(&config, &session).await;

    let routes = Arc::new(RouteTable::new(&config.pages));

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        session,
        routes,
        verifier,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Could not bind to specified address");

    axum::serve(listener, app).await?;

    Ok(())
}
