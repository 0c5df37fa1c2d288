//! Arcjet MCP Server Library
//!
//! This crate exposes read-only Arcjet API operations (teams and sites) as
//! Model Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, identifier validation, the MCP
//!   server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **arcjet**: Authenticated HTTP client and API response types
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use arcjet_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> arcjet_mcp_server::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
