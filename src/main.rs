//! LnExchange MCP Server
//!
//! A Model Context Protocol server for LnExchange spot and perpetual trading.

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lnexchange_mcp::{Config, LnExchangeServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging (stdout carries the MCP protocol)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting LnExchange MCP Server");

    // Create the server
    let server = LnExchangeServer::new(config).inspect_err(|e| {
        tracing::error!(error = %e, "Fatal error during startup");
    })?;

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    tracing::info!("LnExchange MCP Server running on stdio");

    // Wait for the server to finish
    running.waiting().await?;

    Ok(())
}
