//! Session Management
//!
//! Persisted session storage and the bootstrap state machine that turns a
//! stored token and/or OAuth callback parameters into a single auth state.

pub mod bootstrap;
pub mod store;

pub use bootstrap::{AuthState, BootstrapController, BootstrapStep, NavContext};
pub use store::{LocalStorageStore, SessionStore, SessionToken};
