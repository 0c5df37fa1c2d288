//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, input validation, server
//! lifecycle management, and the stdio transport.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{TypeId, TypeIdError, validate_typeid};
pub use server::McpServer;
pub use transport::StdioTransport;
