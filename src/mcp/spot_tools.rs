//! Spot trading tools.

use rmcp::{handler::server::wrapper::Parameters, tool, tool_router, ErrorData as McpError};

use super::server::{check, respond, LnExchangeServer};
use crate::types::{
    AssetTransfer, CreateUserRequest, EnableSpotTradeRequest, SpotCancelAllRequest,
    SpotCancelRequest, SpotHistoryQuery, SpotOrderQuery, SpotOrderRequest, TokenApproval,
};

#[tool_router(router = spot_tool_router, vis = "pub(crate)")]
impl LnExchangeServer {
    #[tool(
        name = "SpotGetPublicInfo",
        description = "LnExchange spot Get market public information (e.g. currencies, trading pairs, asset id)"
    )]
    pub async fn spot_get_public_info(&self) -> Result<String, McpError> {
        tracing::info!("SpotGetPublicInfo called");
        respond(self.spot.fetch_public_info().await)
    }

    #[tool(name = "SpotGetAllMarkets", description = "LnExchange spot Get market information")]
    pub async fn spot_get_all_markets(&self) -> Result<String, McpError> {
        tracing::info!("SpotGetAllMarkets called");
        respond(self.spot.get_all_markets().await)
    }

    #[tool(name = "SpotGetUserInfo", description = "LnExchange spot Get user account")]
    pub async fn spot_get_user_info(&self) -> Result<String, McpError> {
        tracing::info!("SpotGetUserInfo called");
        respond(self.spot.get_user_info().await)
    }

    #[tool(name = "SpotCreateUser", description = "LnExchange spot Register user")]
    pub async fn spot_create_user(
        &self,
        Parameters(input): Parameters<CreateUserRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(referrals = ?input.referrals, "SpotCreateUser called");
        respond(self.spot.create_user(input.referral_code()).await)
    }

    #[tool(
        name = "SpotApproveToken",
        description = "LnExchange spot Approve token (Required before deposit)"
    )]
    pub async fn spot_approve_token(
        &self,
        Parameters(input): Parameters<TokenApproval>,
    ) -> Result<String, McpError> {
        tracing::info!(token = %input.token_name, amount = %input.amount, "SpotApproveToken called");
        check(input.validate())?;
        respond(self.spot.approve(&input.token_name, &input.amount).await)
    }

    #[tool(
        name = "SpotDepositAsset",
        description = "LnExchange spot Deposit assets (Requires calling SpotApproveToken first)"
    )]
    pub async fn spot_deposit_asset(
        &self,
        Parameters(input): Parameters<AssetTransfer>,
    ) -> Result<String, McpError> {
        tracing::info!(asset_id = %input.asset_id, amount = %input.amount, "SpotDepositAsset called");
        check(input.validate())?;
        respond(self.spot.deposit(&input.asset_id, &input.amount).await)
    }

    #[tool(name = "SpotWithdrawAsset", description = "LnExchange spot Withdraw assets")]
    pub async fn spot_withdraw_asset(
        &self,
        Parameters(input): Parameters<AssetTransfer>,
    ) -> Result<String, McpError> {
        tracing::info!(asset_id = %input.asset_id, amount = %input.amount, "SpotWithdrawAsset called");
        check(input.validate())?;
        respond(self.spot.withdraw(&input.asset_id, &input.amount).await)
    }

    #[tool(name = "SpotCreateOrder", description = "LnExchange spot Create spot trading order")]
    pub async fn spot_create_order(
        &self,
        Parameters(input): Parameters<SpotOrderRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(
            symbol = %input.symbol,
            side = %input.side,
            order_type = %input.order_type,
            volume = %input.volume,
            price = ?input.price,
            "SpotCreateOrder called"
        );
        check(input.validate())?;
        respond(self.spot.create_order(&input).await)
    }

    #[tool(name = "SpotCancelOrder", description = "LnExchange spot Cancel spot trading order")]
    pub async fn spot_cancel_order(
        &self,
        Parameters(input): Parameters<SpotCancelRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(
            order_id = %input.order_id,
            symbol = %input.symbol_name,
            "SpotCancelOrder called"
        );
        check(input.validate())?;
        respond(self.spot.cancel_order(&input).await)
    }

    #[tool(
        name = "SpotCancelAllOrders",
        description = "LnExchange spot Cancel all spot trading orders"
    )]
    pub async fn spot_cancel_all_orders(
        &self,
        Parameters(input): Parameters<SpotCancelAllRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = ?input.symbol, "SpotCancelAllOrders called");
        check(input.validate())?;
        respond(self.spot.cancel_all_orders(&input).await)
    }

    #[tool(name = "SpotEnableTrade", description = "LnExchange spot Enable spot trading pair")]
    pub async fn spot_enable_trade(
        &self,
        Parameters(input): Parameters<EnableSpotTradeRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol_name, "SpotEnableTrade called");
        check(input.validate())?;
        respond(self.spot.enable_trade(&input.symbol_name).await)
    }

    #[tool(
        name = "SpotGetCurrentOrders",
        description = "LnExchange spot Get current orders for a trading pair"
    )]
    pub async fn spot_get_current_orders(
        &self,
        Parameters(input): Parameters<SpotOrderQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol_name, page = ?input.page, "SpotGetCurrentOrders called");
        check(input.validate())?;
        respond(self.spot.current_order_list(&input).await)
    }

    #[tool(
        name = "SpotGetTriggerOrders",
        description = "LnExchange spot Get trigger orders for a trading pair"
    )]
    pub async fn spot_get_trigger_orders(
        &self,
        Parameters(input): Parameters<SpotOrderQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol_name, page = ?input.page, "SpotGetTriggerOrders called");
        check(input.validate())?;
        respond(self.spot.trigger_order_list(&input).await)
    }

    #[tool(
        name = "SpotGetHistoryOrders",
        description = "LnExchange spot Get historical orders for a trading pair"
    )]
    pub async fn spot_get_history_orders(
        &self,
        Parameters(input): Parameters<SpotHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol_name, page = ?input.page, "SpotGetHistoryOrders called");
        check(input.validate())?;
        respond(self.spot.history_order_list(&input).await)
    }

    #[tool(
        name = "SpotGetHistoryTriggerOrders",
        description = "LnExchange spot Get historical trigger orders for a trading pair"
    )]
    pub async fn spot_get_history_trigger_orders(
        &self,
        Parameters(input): Parameters<SpotHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            symbol = %input.symbol_name,
            page = ?input.page,
            "SpotGetHistoryTriggerOrders called"
        );
        check(input.validate())?;
        respond(self.spot.history_trigger_order_list(&input).await)
    }

    #[tool(
        name = "SpotGetTradeHistory",
        description = "LnExchange spot Get trade history for a trading pair"
    )]
    pub async fn spot_get_trade_history(
        &self,
        Parameters(input): Parameters<SpotHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol_name, page = ?input.page, "SpotGetTradeHistory called");
        check(input.validate())?;
        respond(self.spot.his_trade_list(&input).await)
    }
}
