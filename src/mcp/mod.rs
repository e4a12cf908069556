//! MCP server for wikirace — exposes races between articles via the
//! Model Context Protocol.

pub mod params;

use params::*;
use crate::api::{RaceApi, RaceQuery};
use crate::config::RaceConfig;
use crate::lookup::HttpLinkLookup;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use std::sync::Arc;
use tracing::{error, info};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ok_text(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn err_text(msg: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg)]))
}

// ---------------------------------------------------------------------------
// WikiRaceMcpServer
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct WikiRaceMcpServer {
    api: Arc<RaceApi>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WikiRaceMcpServer {
    pub fn new(api: Arc<RaceApi>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Find a chain of links between two Wikipedia articles")]
    async fn race(
        &self,
        Parameters(p): Parameters<RaceParams>,
    ) -> Result<CallToolResult, McpError> {
        // Rejected and exhausted races are ordinary responses, not tool errors
        let response = self.api.race(&RaceQuery::new(p.start, p.destination)).await;
        match serde_json::to_string_pretty(&response) {
            Ok(json) => ok_text(json),
            Err(e) => err_text(e.to_string()),
        }
    }

    #[tool(description = "Show the canonical lookup key for an article title")]
    fn article_key(
        &self,
        Parameters(p): Parameters<ArticleKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        if p.title.trim().is_empty() {
            return err_text("title must not be empty".to_string());
        }
        ok_text(self.api.key_for_title(p.title.trim()))
    }
}

#[tool_handler]
impl ServerHandler for WikiRaceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "wikirace MCP server — finds link paths between Wikipedia articles".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run the MCP server on stdio until the client disconnects.
///
/// Returns a process exit code.
pub fn run_mcp_server(config: RaceConfig) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        let lookup = match HttpLinkLookup::new(&config) {
            Ok(lookup) => Arc::new(lookup),
            Err(e) => {
                error!("failed to build HTTP client: {}", e);
                return 1;
            }
        };
        let server = WikiRaceMcpServer::new(Arc::new(RaceApi::new(lookup, &config)));

        info!("wikirace mcp server starting on stdio...");

        let service = match server.serve(rmcp::transport::stdio()).await {
            Ok(s) => s,
            Err(e) => {
                error!("failed to start MCP server: {}", e);
                return 1;
            }
        };

        if let Err(e) = service.waiting().await {
            error!("MCP server error: {}", e);
            return 1;
        }

        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::StaticLinkLookup;

    fn server(lookup: StaticLinkLookup) -> WikiRaceMcpServer {
        WikiRaceMcpServer::new(Arc::new(RaceApi::new(
            Arc::new(lookup),
            &RaceConfig::default(),
        )))
    }

    fn text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    fn race_params(start: &str, destination: &str) -> Parameters<RaceParams> {
        Parameters(RaceParams {
            start: start.into(),
            destination: destination.into(),
        })
    }

    #[tokio::test]
    async fn exhausted_race_is_a_successful_tool_result() {
        let lookup = StaticLinkLookup::new()
            .with_links("A", &["B"])
            .with_links("D", &["E"]);
        let result = server(lookup).race(race_params("A", "D")).await.unwrap();

        assert_eq!(result.is_error, Some(false));
        let json: serde_json::Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(json["completed"], false);
        assert_eq!(json["path"], crate::NO_PATH_FOUND);
    }

    #[tokio::test]
    async fn rejected_race_is_a_successful_tool_result() {
        let lookup = StaticLinkLookup::new().with_links("A", &["B"]);
        let result = server(lookup).race(race_params("A", "Nowhere")).await.unwrap();

        assert_eq!(result.is_error, Some(false));
        let json: serde_json::Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(json["message"], "The article Nowhere does not exist.");
    }

    #[test]
    fn blank_title_has_no_key() {
        let result = server(StaticLinkLookup::new())
            .article_key(Parameters(ArticleKeyParams { title: " ".into() }))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
