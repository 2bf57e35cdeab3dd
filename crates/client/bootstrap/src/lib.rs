//! Builds the session facade used by host clients.
//!
//! [`SessionConfig`] captures environment-driven settings and
//! [`SessionBuilder`] wires the world snapshot, managers, and dispatcher into
//! a ready [`GateSession`].
pub mod builder;
pub mod config;

pub use builder::{BuildError, GateSession, SessionBuilder};
pub use config::{CellConfig, SessionConfig};
