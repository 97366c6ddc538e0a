use std::sync::{Arc, RwLock};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The identity of a logged-in user.
///
/// Both fields are always set together: a session either has a full
/// identity or none at all. Partial identities are not representable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Identity {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// A point-in-time view of the session, taken once per guard evaluation
/// so a single navigation decision never observes two different states.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub initial_fetch_done: bool,
}

#[derive(Debug, Default)]
struct SessionState {
    identity: Option<Identity>,
    initial_fetch_done: bool,
}

/// Shared handle to the session state.
///
/// Cloning is cheap and every clone refers to the same state, so the
/// handle can be injected into the router state and into the bootstrap
/// without a module-level singleton. Mutation happens only from discrete
/// request events, reads from the guard and the `/session` endpoint.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    /// Creates a fresh session: no identity, initial fetch not yet done.
    pub fn new() -> Self {
        Session::default()
    }

    /// Records the given identity as the current user.
    ///
    /// The inputs are assumed to have been validated upstream (by the
    /// verifier or the whoami endpoint); this only stores them. The
    /// initial-fetch flag is left untouched.
    pub fn login(&self, email: impl Into<String>, name: impl Into<String>) {
        let identity = Identity::new(email, name);
        debug!("Session login for '{}'", identity.email);
        let mut state = self.inner.write().expect("session lock poisoned");
        state.identity = Some(identity);
    }

    /// Clears the current identity. Calling this on an already logged-out
    /// session is a no-op.
    pub fn logout(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        if let Some(identity) = state.identity.take() {
            debug!("Session logout for '{}'", identity.email);
        }
    }

    /// True iff an identity is currently recorded.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .identity
            .is_some()
    }

    /// Returns a copy of the current identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .identity
            .clone()
    }

    pub fn initial_fetch_done(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .initial_fetch_done
    }

    /// Marks the one-time startup identity check as complete. Until this is
    /// called the guard treats auth state as indeterminate rather than
    /// logged-out.
    pub fn mark_initial_fetch_done(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.initial_fetch_done = true;
    }

    /// Takes a consistent snapshot for guard evaluation.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.inner.read().expect("session lock poisoned");
        SessionSnapshot {
            identity: state.identity.clone(),
            initial_fetch_done: state.initial_fetch_done,
        }
    }
}
