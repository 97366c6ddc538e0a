//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the session, the route table, and the
//! credential verifier.

use std::sync::Arc;

use crate::config::ConfigV1;
use crate::guard::RouteTable;
use crate::session::Session;
use crate::verify::Verifier;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request handler; every clone shares the same session
/// and route table.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// The single session of this running client.
    pub session: Session,
    /// Static page route table with auth policies.
    pub routes: Arc<RouteTable>,
    /// Credential verifier for login submissions.
    pub verifier: Arc<dyn Verifier>,
}
