//! Arcjet site listing tool.
//!
//! Lists the sites of one team. The team identifier is validated as a
//! `team` TypeID before any request is made; a bad identifier is rejected
//! through the protocol's invalid-params error.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::common::{ListingMessages, format_bullet, parse_arguments, render_listing};
use crate::core::security::{TypeId, validate_typeid};
use crate::domains::arcjet::{ArcjetClient, Listing, Site};
use crate::domains::tools::ToolError;

/// TypeID prefix carried by team identifiers.
const TEAM_PREFIX: &str = "team";

/// Parameters for the site listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSitesParams {
    /// The ID of the team to list sites for.
    #[schemars(description = "The ID of the team to list sites for")]
    pub team_id: String,
}

/// Arcjet site listing tool.
#[derive(Debug, Clone)]
pub struct ListSitesTool;

impl ListSitesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list-sites";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all Arcjet sites for a specific team";

    const MESSAGES: ListingMessages = ListingMessages {
        failure: "Failed to retrieve sites from Arcjet API.",
        empty: "No sites found for the specified team.",
        header: "Available sites:",
    };

    /// Validate the team identifier.
    pub fn validate(params: &ListSitesParams) -> Result<TypeId, ToolError> {
        validate_typeid(&params.team_id, TEAM_PREFIX)
            .map_err(|source| ToolError::invalid_identifier("teamId", TEAM_PREFIX, source))
    }

    /// Fetch and render the site listing for a validated team.
    #[instrument(skip_all, fields(team_id = %team_id))]
    pub async fn execute(client: &ArcjetClient, team_id: &TypeId) -> CallToolResult {
        info!("List sites tool called");
        Self::render(client.list_sites(team_id).await)
    }

    /// Map a site listing to the tool result.
    pub fn render(listing: Listing<Site>) -> CallToolResult {
        render_listing(listing, &Self::MESSAGES, |site| {
            format_bullet(&site.name, &site.id)
        })
    }

    /// Handle a raw tool call.
    pub async fn call(
        client: &ArcjetClient,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: ListSitesParams = parse_arguments(arguments)?;
        let team_id = Self::validate(&params).inspect_err(|e| {
            warn!("Rejected list-sites call: {}", e);
        })?;
        Ok(Self::execute(client, &team_id).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSitesParams>(),
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
