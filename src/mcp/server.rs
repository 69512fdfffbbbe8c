//! Weightcast MCP Server Implementation
//!
//! Exposes the engine as MCP tools over stdio.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServiceConfig;
use crate::tools::inputs::EngineRequest;
use crate::tools::metrics;
use crate::tools::status::StatusTracker;

/// Weightcast MCP Service
#[derive(Clone)]
pub struct WeightcastService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<ServiceConfig>,
    tool_router: ToolRouter<WeightcastService>,
}

impl WeightcastService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateRateParams {
    /// Method to evaluate; defaults to the settings' effective method
    pub method: Option<String>,
    #[serde(flatten)]
    pub request: EngineRequest,
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl WeightcastService {
    // --- Status ---

    #[tool(description = "Get the current status of the Weightcast service including build info, configuration, and process information")]
    async fn weightcast_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for calling the engine tools: request shape, estimation methods, and how to read results. Call this first when unsure how to use Weightcast.")]
    fn engine_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ENGINE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ENGINE_INSTRUCTIONS)]))
    }

    // --- Engine ---

    #[tool(description = "Recompute every metric from a snapshot of weigh-ins, daily logs and goal settings: maintenance estimate, days remaining, warning message, 60-day projections and weight change summary")]
    fn update_metrics(&self, Parameters(p): Parameters<EngineRequest>) -> Result<CallToolResult, McpError> {
        let result = metrics::update_metrics(&self.config, &p)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Estimate the daily rate of weight change for one method (weight_trend_30_day, current_eating_habits, perfect_goal_adherence)")]
    fn estimate_rate(&self, Parameters(p): Parameters<EstimateRateParams>) -> Result<CallToolResult, McpError> {
        let result = metrics::estimate_rate(&self.config, &p.request, p.method.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Estimate maintenance calories from the last 30 days of weight change and logged intake")]
    fn estimate_maintenance(&self, Parameters(p): Parameters<EngineRequest>) -> Result<CallToolResult, McpError> {
        let result = metrics::estimate_maintenance(&self.config, &p)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Estimate days until the target weight, with the reason when no estimate is possible")]
    fn days_remaining(&self, Parameters(p): Parameters<EngineRequest>) -> Result<CallToolResult, McpError> {
        let result = metrics::days_remaining(&self.config, &p)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Summarize weight change over the last 7, 30, 90 days and all time")]
    fn weight_change_summary(&self, Parameters(p): Parameters<EngineRequest>) -> Result<CallToolResult, McpError> {
        let result = metrics::weight_change_summary(&self.config, &p)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Project weight 60 days ahead from the latest weigh-in, one series per estimation method")]
    fn projection_series(&self, Parameters(p): Parameters<EngineRequest>) -> Result<CallToolResult, McpError> {
        let result = metrics::projection_series(&self.config, &p)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for WeightcastService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weightcast".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Weightcast".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Weightcast - goal projection and metabolic estimation. Stateless: send the full \
                 snapshot (weights, logs, settings, optional unit and today) with every call. \
                 IMPORTANT: Call engine_instructions first. \
                 Everything at once: update_metrics. \
                 Single figures: days_remaining, estimate_rate, estimate_maintenance, \
                 weight_change_summary, projection_series. \
                 Status: weightcast_status."
                    .into(),
            ),
        }
    }
}
