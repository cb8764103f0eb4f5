//! Backend API
//!
//! HTTP client for the stats backend and the error taxonomy its callers
//! match on.

pub mod client;
pub mod error;

pub use client::{get_api_base, set_api_base};
pub use error::FetchError;
