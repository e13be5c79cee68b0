//! Exchange API clients.
//!
//! `SpotApi` and `PerpetualApi` are the seams the MCP server talks to. The
//! HTTP implementations forward every call as exactly one REST request and
//! hand back the exchange's JSON untouched.

pub mod client;
pub mod endpoints;
pub mod perpetual;
pub mod signer;
pub mod spot;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::Result,
    types::{
        PerpetualCancelAllRequest, PerpetualCancelRequest, PerpetualHistoryQuery,
        PerpetualOrderQuery, PerpetualOrderRequest, PositionHistoryQuery, SpotCancelAllRequest,
        SpotCancelRequest, SpotHistoryQuery, SpotOrderQuery, SpotOrderRequest,
    },
};

pub use client::ExchangeClient;
pub use perpetual::PerpetualClient;
pub use signer::RequestSigner;
pub use spot::SpotClient;

/// Spot trading operations.
#[async_trait]
pub trait SpotApi: Send + Sync {
    /// Currencies, trading pairs and asset ids.
    async fn fetch_public_info(&self) -> Result<Value>;
    async fn get_all_markets(&self) -> Result<Value>;
    async fn get_user_info(&self) -> Result<Value>;
    async fn create_user(&self, referrals: &str) -> Result<Value>;
    async fn enable_trade(&self, symbol_name: &str) -> Result<Value>;
    async fn approve(&self, token_name: &str, amount: &str) -> Result<Value>;
    async fn deposit(&self, asset_id: &str, amount: &str) -> Result<Value>;
    async fn withdraw(&self, asset_id: &str, amount: &str) -> Result<Value>;
    async fn create_order(&self, order: &SpotOrderRequest) -> Result<Value>;
    async fn cancel_order(&self, cancel: &SpotCancelRequest) -> Result<Value>;
    async fn cancel_all_orders(&self, cancel: &SpotCancelAllRequest) -> Result<Value>;
    async fn current_order_list(&self, query: &SpotOrderQuery) -> Result<Value>;
    async fn trigger_order_list(&self, query: &SpotOrderQuery) -> Result<Value>;
    async fn history_order_list(&self, query: &SpotHistoryQuery) -> Result<Value>;
    async fn history_trigger_order_list(&self, query: &SpotHistoryQuery) -> Result<Value>;
    async fn his_trade_list(&self, query: &SpotHistoryQuery) -> Result<Value>;
}

/// Perpetual contract trading operations.
#[async_trait]
pub trait PerpetualApi: Send + Sync {
    /// Currencies, contracts and asset ids.
    async fn fetch_public_info(&self) -> Result<Value>;
    async fn get_all_markets(&self) -> Result<Value>;
    async fn get_user_info(&self) -> Result<Value>;
    async fn create_user(&self, referrals: &str) -> Result<Value>;
    async fn enable_trade(&self, contract_name: &str) -> Result<Value>;
    async fn approve(&self, token_name: &str, amount: &str) -> Result<Value>;
    async fn deposit(&self, asset_id: &str, amount: &str) -> Result<Value>;
    async fn withdraw(&self, asset_id: &str, amount: &str) -> Result<Value>;
    async fn create_order(&self, order: &PerpetualOrderRequest) -> Result<Value>;
    async fn cancel_order(&self, cancel: &PerpetualCancelRequest) -> Result<Value>;
    async fn cancel_all_orders(&self, cancel: &PerpetualCancelAllRequest) -> Result<Value>;
    async fn current_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value>;
    async fn trigger_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value>;
    async fn history_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value>;
    async fn history_trigger_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value>;
    async fn his_trade_list(&self, query: &PerpetualHistoryQuery) -> Result<Value>;
    async fn get_all_positions(&self) -> Result<Value>;
    async fn get_history_positions(&self, query: &PositionHistoryQuery) -> Result<Value>;
}
