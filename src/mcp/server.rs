//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler, ErrorData as McpError, ServerHandler,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, Result as AppResult},
    exchange::{PerpetualApi, PerpetualClient, RequestSigner, SpotApi, SpotClient},
};

/// LnExchange MCP Server.
///
/// Exposes spot tools always, and perpetual tools when a perpetual client is
/// present. Every tool forwards to exactly one client call.
#[derive(Clone)]
pub struct LnExchangeServer {
    pub(crate) spot: Arc<dyn SpotApi>,
    pub(crate) perpetual: Option<Arc<dyn PerpetualApi>>,
    tool_router: ToolRouter<Self>,
}

impl LnExchangeServer {
    /// Create a server backed by the HTTP exchange clients.
    ///
    /// Note: no network calls are made here. The exchange is first contacted
    /// when a tool is invoked.
    pub fn new(config: Config) -> AppResult<Self> {
        tracing::info!("Initializing LnExchange MCP Server");

        if config.uses_default_spot_url() {
            tracing::warn!(
                spot_url = %config.spot_url,
                "Using the built-in development spot host; set LNEXCHANGE_SPOT_URL to choose another"
            );
        }

        let signer = RequestSigner::from_private_key(&config.private_key)?;

        let spot = SpotClient::from_config(&config, signer.clone())?;
        let perpetual = PerpetualClient::from_config(&config, signer)?;

        let server = Self::with_clients(
            Arc::new(spot),
            perpetual.map(|p| Arc::new(p) as Arc<dyn PerpetualApi>),
        );

        tracing::info!(
            spot_url = %config.spot_url,
            perpetual_url = ?config.perpetual_url,
            "LnExchange MCP Server initialized successfully"
        );

        Ok(server)
    }

    /// Create a server around arbitrary client implementations.
    pub fn with_clients(
        spot: Arc<dyn SpotApi>,
        perpetual: Option<Arc<dyn PerpetualApi>>,
    ) -> Self {
        let mut tool_router = Self::spot_tool_router();
        if perpetual.is_some() {
            tool_router = tool_router + Self::perpetual_tool_router();
        }

        Self { spot, perpetual, tool_router }
    }

    /// Whether perpetual tools are registered.
    pub fn perpetual_enabled(&self) -> bool {
        self.perpetual.is_some()
    }

    /// Names of all registered tools, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();
        names
    }

    pub(crate) fn perpetual_client(&self) -> Result<&Arc<dyn PerpetualApi>, McpError> {
        self.perpetual.as_ref().ok_or_else(|| AppError::PerpetualDisabled.into())
    }
}

/// Turn a client result into tool output: the raw response as compact JSON.
pub(crate) fn respond(result: AppResult<Value>) -> Result<String, McpError> {
    let value = result.map_err(|e| {
        tracing::warn!(error = %e, "Exchange call failed");
        McpError::from(e)
    })?;

    serde_json::to_string(&value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

/// Run a request's shape checks, reporting failures as invalid params.
pub(crate) fn check(validation: AppResult<()>) -> Result<(), McpError> {
    validation.map_err(McpError::from)
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LnExchangeServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = if self.perpetual_enabled() {
            "LnExchange MCP Server. Provides spot and perpetual trading tools: market data, \
             account setup, asset transfers, order placement and order history."
        } else {
            "LnExchange MCP Server. Provides spot trading tools: market data, account setup, \
             asset transfers, order placement and order history."
        };

        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "lnexchange-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions.to_string()),
        }
    }
}
