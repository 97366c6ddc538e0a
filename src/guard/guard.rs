use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::session::SessionSnapshot;

/// Authentication constraint a route carries. A route has exactly one
/// policy, so the "requires auth" and "auth exclusive" cases cannot be
/// combined on the same entry.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AuthPolicy {
    /// Anyone may enter.
    #[default]
    None,
    /// Only an authenticated session may enter.
    RequireAuth,
    /// Only an unauthenticated session may enter (login, registration).
    RequireNoAuth,
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Serve the page.
    Allow,
    /// The route needs an identity and the session definitely has none.
    RedirectToLogin,
    /// The route is auth-exclusive and an identity is already present.
    Deny,
}

/// Decides whether a session may enter a route.
///
/// Stateless: reads the snapshot, never mutates anything. Auth-exclusivity
/// is checked before the requires-auth rule. When the route requires auth
/// but the initial identity fetch has not completed, the state is
/// indeterminate and the transition is allowed rather than redirected, so
/// startup never bounces a possibly-valid session to the login page.
pub fn evaluate(policy: AuthPolicy, session: &SessionSnapshot) -> GuardDecision {
    match policy {
        AuthPolicy::RequireNoAuth => {
            if session.identity.is_some() {
                GuardDecision::Deny
            } else {
                GuardDecision::Allow
            }
        }
        AuthPolicy::RequireAuth => {
            if session.identity.is_some() {
                GuardDecision::Allow
            } else if session.initial_fetch_done {
                GuardDecision::RedirectToLogin
            } else {
                GuardDecision::Allow
            }
        }
        AuthPolicy::None => GuardDecision::Allow,
    }
}
