//! Common utilities shared across Arcjet tools.
//!
//! This module provides argument decoding, listing rendering and result
//! helpers so every listing tool reports failure, empty and populated
//! outcomes the same way.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::arcjet::Listing;
use crate::domains::tools::ToolError;

/// Fixed user-facing messages for one listing tool.
#[derive(Debug, Clone, Copy)]
pub struct ListingMessages {
    /// Reported with `isError` when the upstream call failed.
    pub failure: &'static str,
    /// Reported when the upstream returned no entities.
    pub empty: &'static str,
    /// First line of a populated listing.
    pub header: &'static str,
}

/// Decode raw call arguments into a tool's parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Map a listing outcome to a tool result.
///
/// Entities keep their upstream order, one bullet line each.
pub fn render_listing<T>(
    listing: Listing<T>,
    messages: &ListingMessages,
    bullet: impl Fn(&T) -> String,
) -> CallToolResult {
    match listing {
        Listing::Failed => error_result(messages.failure),
        Listing::Empty => success_result(messages.empty.to_string()),
        Listing::Items(items) => {
            let formatted = items.iter().map(bullet).collect::<Vec<_>>().join("\n");
            success_result(format!("{}\n\n{}", messages.header, formatted))
        }
    }
}

/// Format a single listing bullet.
pub fn format_bullet(name: &str, id: &str) -> String {
    format!("• {} (ID: {})", name, id)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Extract the text of the first content item.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: ListingMessages = ListingMessages {
        failure: "Failed to retrieve things.",
        empty: "No things found.",
        header: "Available things:",
    };

    fn render(listing: Listing<&'static str>) -> CallToolResult {
        render_listing(listing, &MESSAGES, |name| format_bullet(name, "thing_1"))
    }

    #[test]
    fn test_render_failed() {
        let result = render(Listing::Failed);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(result_text(&result), "Failed to retrieve things.");
    }

    #[test]
    fn test_render_empty() {
        let result = render(Listing::Empty);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "No things found.");
    }

    #[test]
    fn test_render_items_in_order() {
        let result = render(Listing::Items(vec!["b", "a"]));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            "Available things:\n\n• b (ID: thing_1)\n• a (ID: thing_1)"
        );
    }

    #[test]
    fn test_parse_arguments_rejects_wrong_type() {
        #[derive(Debug, serde::Deserialize)]
        struct Params {
            #[allow(dead_code)]
            value: String,
        }

        let mut args = JsonObject::new();
        args.insert("value".to_string(), serde_json::json!(42));
        let result: Result<Params, _> = parse_arguments(args);
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
