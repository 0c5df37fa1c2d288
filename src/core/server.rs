//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are dispatched through the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; each route shares one Arcjet client.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::*,
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{arcjet::ArcjetClient, tools::build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the Arcjet client cannot be built from the configuration.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(ArcjetClient::new(Arc::new(config.arcjet.clone()))?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to Arcjet. Use list-teams to find team IDs, then \
                 list-sites with a team ID to see its sites."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "arcjet");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_server_lists_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let mut names: Vec<_> = server
            .list_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["list-sites", "list-teams"]);
    }

    #[test]
    fn test_server_rejects_invalid_credential() {
        let mut config = Config::default();
        config.arcjet.api_key = Some("line\nbreak".to_string());
        assert!(matches!(
            McpServer::new(config),
            Err(crate::core::Error::Arcjet(_))
        ));
    }
}
