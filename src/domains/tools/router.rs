//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects
//! them and hands them the shared Arcjet client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::arcjet::ArcjetClient;

use super::definitions::{ListSitesTool, ListTeamsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ArcjetClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListTeamsTool::create_route(client.clone()))
        .with_route(ListSitesTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ArcjetConfig;

    struct TestServer {}

    fn test_client() -> Arc<ArcjetClient> {
        Arc::new(ArcjetClient::new(Arc::new(ArcjetConfig::default())).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list-teams"));
        assert!(names.contains(&"list-sites"));
    }

    #[test]
    fn test_list_sites_schema_requires_team_id() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        let list_sites = tools.iter().find(|t| t.name == "list-sites").unwrap();
        let required = list_sites.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["teamId"]));
    }
}
