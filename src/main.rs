//! Weightcast
//!
//! An MCP server for goal projection and metabolic estimation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use weightcast::build_info;
use weightcast::config::ServiceConfig;
use weightcast::mcp::WeightcastService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("weightcast=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServiceConfig::from_env();
    info!(
        unit = config.default_unit.as_str(),
        fixed_today = ?config.fixed_today,
        "configuration loaded"
    );

    let service = WeightcastService::new(config);

    eprintln!("Starting MCP server on stdio...");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
