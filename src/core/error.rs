//! Error types and handling for the MCP server.
//!
//! Startup failures (building the Arcjet client, establishing the stdio
//! session) are collected here and are fatal. Tool-call errors never reach
//! this type; they are answered through the protocol.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified startup error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Arcjet client could not be built from the configuration.
    #[error("Arcjet API error: {0}")]
    Arcjet(#[from] crate::domains::arcjet::ArcjetError),

    /// Error establishing or running the protocol transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::arcjet::ArcjetError;

    #[test]
    fn test_transport_failure_converts() {
        let err: Error = TransportError::init("connection closed: initialize request").into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: connection closed: initialize request"
        );
    }

    #[test]
    fn test_client_failure_converts() {
        let err: Error = ArcjetError::client("Invalid API key format").into();
        assert!(matches!(err, Error::Arcjet(_)));
        assert!(err.to_string().contains("Invalid API key format"));
    }
}
