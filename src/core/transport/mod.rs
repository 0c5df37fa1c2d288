//! Transport layer for the MCP server.
//!
//! The server speaks line-delimited JSON-RPC over standard input/output.
//! Diagnostics go to stderr, so stdout carries protocol messages only.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
