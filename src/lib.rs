//! Stateless credentials and route-level access control for athlon.
//!
//! This facade crate re-exports the athlon crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Configuration, constants, and runtime utilities
//! - [`auth`] — Credential codec, passwords, and accounts
//! - [`gate`] — Route classification and access decisions
//! - [`server`] — Unified backend

pub use ath_core   as core;
pub use ath_auth   as auth;
pub use ath_gate   as gate;
pub use ath_server as server;

// Re-export commonly used types at the root
pub use ath_core::*;
