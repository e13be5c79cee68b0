//! Perpetual contract trading tools.
//!
//! Only routed when the server was built with a perpetual client.

use rmcp::{handler::server::wrapper::Parameters, tool, tool_router, ErrorData as McpError};

use super::server::{check, respond, LnExchangeServer};
use crate::types::{
    AssetTransfer, CreateUserRequest, EnableContractTradeRequest, PerpetualCancelAllRequest,
    PerpetualCancelRequest, PerpetualHistoryQuery, PerpetualOrderQuery, PerpetualOrderRequest,
    PositionHistoryQuery, TokenApproval,
};

#[tool_router(router = perpetual_tool_router, vis = "pub(crate)")]
impl LnExchangeServer {
    #[tool(
        name = "PerpetualGetPublicInfo",
        description = "LnExchange perpetual Get market public information (e.g. currencies, trading pairs, contract name, asset id)"
    )]
    pub async fn perpetual_get_public_info(&self) -> Result<String, McpError> {
        tracing::info!("PerpetualGetPublicInfo called");
        respond(self.perpetual_client()?.fetch_public_info().await)
    }

    #[tool(
        name = "PerpetualGetUserInfo",
        description = "LnExchange perpetual Get user account information"
    )]
    pub async fn perpetual_get_user_info(&self) -> Result<String, McpError> {
        tracing::info!("PerpetualGetUserInfo called");
        respond(self.perpetual_client()?.get_user_info().await)
    }

    #[tool(
        name = "PerpetualGetAllMarkets",
        description = "LnExchange perpetual Get all markets information"
    )]
    pub async fn perpetual_get_all_markets(&self) -> Result<String, McpError> {
        tracing::info!("PerpetualGetAllMarkets called");
        respond(self.perpetual_client()?.get_all_markets().await)
    }

    #[tool(name = "PerpetualCreateUser", description = "LnExchange perpetual Register user")]
    pub async fn perpetual_create_user(
        &self,
        Parameters(input): Parameters<CreateUserRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(referrals = ?input.referrals, "PerpetualCreateUser called");
        let client = self.perpetual_client()?;
        respond(client.create_user(input.referral_code()).await)
    }

    #[tool(
        name = "PerpetualEnableTrade",
        description = "LnExchange perpetual Enable trading for contract"
    )]
    pub async fn perpetual_enable_trade(
        &self,
        Parameters(input): Parameters<EnableContractTradeRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(contract = %input.contract_name, "PerpetualEnableTrade called");
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.enable_trade(&input.contract_name).await)
    }

    #[tool(
        name = "PerpetualApproveToken",
        description = "LnExchange perpetual Approve token (Required before PerpetualDepositAsset)"
    )]
    pub async fn perpetual_approve_token(
        &self,
        Parameters(input): Parameters<TokenApproval>,
    ) -> Result<String, McpError> {
        tracing::info!(
            token = %input.token_name,
            amount = %input.amount,
            "PerpetualApproveToken called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.approve(&input.token_name, &input.amount).await)
    }

    #[tool(
        name = "PerpetualDepositAsset",
        description = "LnExchange perpetual Deposit assets (Requires calling PerpetualApproveToken first)"
    )]
    pub async fn perpetual_deposit_asset(
        &self,
        Parameters(input): Parameters<AssetTransfer>,
    ) -> Result<String, McpError> {
        tracing::info!(
            asset_id = %input.asset_id,
            amount = %input.amount,
            "PerpetualDepositAsset called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.deposit(&input.asset_id, &input.amount).await)
    }

    #[tool(name = "PerpetualWithdrawAsset", description = "LnExchange perpetual Withdraw assets")]
    pub async fn perpetual_withdraw_asset(
        &self,
        Parameters(input): Parameters<AssetTransfer>,
    ) -> Result<String, McpError> {
        tracing::info!(
            asset_id = %input.asset_id,
            amount = %input.amount,
            "PerpetualWithdrawAsset called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.withdraw(&input.asset_id, &input.amount).await)
    }

    #[tool(
        name = "PerpetualCreateOrder",
        description = "LnExchange perpetual Create trading order"
    )]
    pub async fn perpetual_create_order(
        &self,
        Parameters(input): Parameters<PerpetualOrderRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            side = %input.side,
            order_type = %input.order_type,
            volume = %input.volume,
            price = ?input.price,
            leverage = ?input.leverage_level,
            "PerpetualCreateOrder called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.create_order(&input).await)
    }

    #[tool(
        name = "PerpetualCancelOrder",
        description = "LnExchange perpetual Cancel trading order"
    )]
    pub async fn perpetual_cancel_order(
        &self,
        Parameters(input): Parameters<PerpetualCancelRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            order_id = %input.order_id,
            "PerpetualCancelOrder called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.cancel_order(&input).await)
    }

    #[tool(
        name = "PerpetualCancelAllOrders",
        description = "LnExchange perpetual Cancel all trading orders"
    )]
    pub async fn perpetual_cancel_all_orders(
        &self,
        Parameters(input): Parameters<PerpetualCancelAllRequest>,
    ) -> Result<String, McpError> {
        tracing::info!(contract = ?input.contract_name, "PerpetualCancelAllOrders called");
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.cancel_all_orders(&input).await)
    }

    #[tool(
        name = "PerpetualGetCurrentOrders",
        description = "LnExchange perpetual Get current orders"
    )]
    pub async fn perpetual_get_current_orders(
        &self,
        Parameters(input): Parameters<PerpetualOrderQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            page = ?input.page,
            "PerpetualGetCurrentOrders called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.current_order_list(&input).await)
    }

    #[tool(
        name = "PerpetualGetTriggerOrders",
        description = "LnExchange perpetual Get trigger orders"
    )]
    pub async fn perpetual_get_trigger_orders(
        &self,
        Parameters(input): Parameters<PerpetualOrderQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            page = ?input.page,
            "PerpetualGetTriggerOrders called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.trigger_order_list(&input).await)
    }

    #[tool(
        name = "PerpetualGetHistoryOrders",
        description = "LnExchange perpetual Get history orders"
    )]
    pub async fn perpetual_get_history_orders(
        &self,
        Parameters(input): Parameters<PerpetualHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            page = ?input.page,
            "PerpetualGetHistoryOrders called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.history_order_list(&input).await)
    }

    #[tool(
        name = "PerpetualGetHistoryTriggerOrders",
        description = "LnExchange perpetual Get history trigger orders"
    )]
    pub async fn perpetual_get_history_trigger_orders(
        &self,
        Parameters(input): Parameters<PerpetualHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            page = ?input.page,
            "PerpetualGetHistoryTriggerOrders called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.history_trigger_order_list(&input).await)
    }

    #[tool(
        name = "PerpetualGetTradeHistory",
        description = "LnExchange perpetual Get trade history"
    )]
    pub async fn perpetual_get_trade_history(
        &self,
        Parameters(input): Parameters<PerpetualHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract = %input.contract_name,
            page = ?input.page,
            "PerpetualGetTradeHistory called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.his_trade_list(&input).await)
    }

    #[tool(
        name = "PerpetualGetAllPositions",
        description = "LnExchange perpetual Get all positions"
    )]
    pub async fn perpetual_get_all_positions(&self) -> Result<String, McpError> {
        tracing::info!("PerpetualGetAllPositions called");
        respond(self.perpetual_client()?.get_all_positions().await)
    }

    #[tool(
        name = "PerpetualGetHistoryPositions",
        description = "LnExchange perpetual Get history positions"
    )]
    pub async fn perpetual_get_history_positions(
        &self,
        Parameters(input): Parameters<PositionHistoryQuery>,
    ) -> Result<String, McpError> {
        tracing::info!(
            contract_id = %input.contract_id,
            page = ?input.page,
            "PerpetualGetHistoryPositions called"
        );
        let client = self.perpetual_client()?;
        check(input.validate())?;
        respond(client.get_history_positions(&input).await)
    }
}
