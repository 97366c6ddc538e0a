//! The navigation guard: a pure decision over the route table and the
//! current session, evaluated before any page is served.

pub mod guard;
pub mod table;

pub use guard::{evaluate, AuthPolicy, GuardDecision};
pub use table::{RouteDescriptor, RouteTable};
