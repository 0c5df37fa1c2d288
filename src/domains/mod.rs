//! Domain modules containing business logic organized by bounded contexts.
//!
//! - **arcjet**: Upstream Arcjet API client and response types
//! - **tools**: MCP tools that can be executed by clients

pub mod arcjet;
pub mod tools;
