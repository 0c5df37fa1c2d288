//! Arcjet API domain module.
//!
//! This module contains the upstream side of the server:
//!
//! - `client.rs` - Authenticated HTTP client for the Arcjet API
//! - `models.rs` - Response types (`Team`, `Site`) and the `Listing` outcome
//! - `error.rs` - Client error types (logged, never returned to callers)

mod client;
mod error;
pub mod models;

pub use client::ArcjetClient;
pub use error::ArcjetError;
pub use models::{Listing, Site, Team};
