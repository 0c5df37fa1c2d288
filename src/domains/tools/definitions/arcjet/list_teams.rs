//! Arcjet team listing tool.
//!
//! Lists every team the configured session can see, marking the default team.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{ListingMessages, format_bullet, parse_arguments, render_listing};
use crate::domains::arcjet::{ArcjetClient, Listing, Team};

/// Parameters for the team listing tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTeamsParams {}

/// Arcjet team listing tool.
#[derive(Debug, Clone)]
pub struct ListTeamsTool;

impl ListTeamsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list-teams";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all Arcjet teams available to the user";

    const MESSAGES: ListingMessages = ListingMessages {
        failure: "Failed to retrieve teams from Arcjet API.",
        empty: "No teams found for the current user.",
        header: "Available teams:",
    };

    /// Fetch and render the team listing.
    #[instrument(skip_all)]
    pub async fn execute(client: &ArcjetClient) -> CallToolResult {
        info!("List teams tool called");
        Self::render(client.list_teams().await)
    }

    /// Map a team listing to the tool result.
    pub fn render(listing: Listing<Team>) -> CallToolResult {
        render_listing(listing, &Self::MESSAGES, |team| {
            let mut line = format_bullet(&team.name, &team.id);
            if team.is_default {
                line.push_str(" [default]");
            }
            line
        })
    }

    /// Handle a raw tool call.
    pub async fn call(
        client: &ArcjetClient,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let _params: ListTeamsParams = parse_arguments(arguments)?;
        Ok(Self::execute(client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListTeamsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP router.
    pub fn create_route<S>(client: Arc<ArcjetClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Self::call(&client, args).await }.boxed()
        })
    }
}
