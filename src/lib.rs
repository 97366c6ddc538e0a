//! Library exports for pollguard, shared between the binary and tests.

pub mod config;
pub mod guard;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod utils;
pub mod verify;
