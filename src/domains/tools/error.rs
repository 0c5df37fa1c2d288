//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::core::security::TypeIdError;

/// Errors that reject a tool call before it does any work.
///
/// Both variants are reported through the protocol's invalid-params error,
/// not as a failed tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments could not be decoded into the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An identifier parameter is malformed or carries the wrong tag.
    #[error("Invalid ID format for '{field}'. Must be a valid TypeID with '{expected}' prefix ({source})")]
    InvalidIdentifier {
        field: &'static str,
        expected: &'static str,
        #[source]
        source: TypeIdError,
    },
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid identifier" error.
    pub fn invalid_identifier(
        field: &'static str,
        expected: &'static str,
        source: TypeIdError,
    ) -> Self {
        Self::InvalidIdentifier {
            field,
            expected,
            source,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}
