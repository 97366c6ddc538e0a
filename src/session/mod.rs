//! Session state for the running client.
//!
//! A single `Session` is created at startup and handed to the router state;
//! nothing in the crate holds session state globally.

pub mod bootstrap;
pub mod session;

pub use bootstrap::resolve_initial_identity;
pub use session::{Identity, Session, SessionSnapshot};
