//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the callable operations exposed to MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by the server handler
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/arcjet/` (e.g., `list_rules.rs`)
//! 2. Define params, `call()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/arcjet/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
