//! Perpetual API over HTTP.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{endpoints, ExchangeClient, PerpetualApi, RequestSigner};
use crate::{
    config::Config,
    error::Result,
    types::{
        PerpetualCancelAllRequest, PerpetualCancelRequest, PerpetualHistoryQuery,
        PerpetualOrderQuery, PerpetualOrderRequest, PositionHistoryQuery,
    },
};

/// Perpetual contract trading client.
#[derive(Debug, Clone)]
pub struct PerpetualClient {
    client: ExchangeClient,
}

impl PerpetualClient {
    /// Wrap an existing exchange client.
    pub fn new(client: ExchangeClient) -> Self {
        Self { client }
    }

    /// Build a signed perpetual client, or `None` when no perpetual URL is
    /// configured.
    pub fn from_config(config: &Config, signer: RequestSigner) -> Result<Option<Self>> {
        config
            .perpetual_url
            .as_deref()
            .map(|url| ExchangeClient::new(url, config.timeout, Some(signer)).map(Self::new))
            .transpose()
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &ExchangeClient {
        &self.client
    }
}

#[async_trait]
impl PerpetualApi for PerpetualClient {
    async fn fetch_public_info(&self) -> Result<Value> {
        self.client.get(endpoints::PUBLIC_INFO, Value::Null).await
    }

    async fn get_all_markets(&self) -> Result<Value> {
        self.client.get(endpoints::ALL_MARKETS, Value::Null).await
    }

    async fn get_user_info(&self) -> Result<Value> {
        self.client.get(endpoints::USER_INFO, Value::Null).await
    }

    async fn create_user(&self, referrals: &str) -> Result<Value> {
        self.client.post(endpoints::CREATE_USER, json!({ "referrals": referrals })).await
    }

    async fn enable_trade(&self, contract_name: &str) -> Result<Value> {
        self.client.post(endpoints::ENABLE_TRADE, json!({ "contractName": contract_name })).await
    }

    async fn approve(&self, token_name: &str, amount: &str) -> Result<Value> {
        let body = json!({ "tokenName": token_name, "amount": amount });
        self.client.post(endpoints::APPROVE, body).await
    }

    async fn deposit(&self, asset_id: &str, amount: &str) -> Result<Value> {
        let body = json!({ "assetId": asset_id, "amount": amount });
        self.client.post(endpoints::DEPOSIT, body).await
    }

    async fn withdraw(&self, asset_id: &str, amount: &str) -> Result<Value> {
        let body = json!({ "assetId": asset_id, "amount": amount });
        self.client.post(endpoints::WITHDRAW, body).await
    }

    async fn create_order(&self, order: &PerpetualOrderRequest) -> Result<Value> {
        self.client.post(endpoints::CREATE_ORDER, serde_json::to_value(order)?).await
    }

    async fn cancel_order(&self, cancel: &PerpetualCancelRequest) -> Result<Value> {
        self.client.post(endpoints::CANCEL_ORDER, serde_json::to_value(cancel)?).await
    }

    async fn cancel_all_orders(&self, cancel: &PerpetualCancelAllRequest) -> Result<Value> {
        self.client.post(endpoints::CANCEL_ALL_ORDERS, serde_json::to_value(cancel)?).await
    }

    async fn current_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value> {
        self.client.get(endpoints::CURRENT_ORDERS, serde_json::to_value(query)?).await
    }

    async fn trigger_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value> {
        self.client.get(endpoints::TRIGGER_ORDERS, serde_json::to_value(query)?).await
    }

    async fn history_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.client.get(endpoints::HISTORY_ORDERS, serde_json::to_value(query)?).await
    }

    async fn history_trigger_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.client.get(endpoints::HISTORY_TRIGGER_ORDERS, serde_json::to_value(query)?).await
    }

    async fn his_trade_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.client.get(endpoints::TRADE_HISTORY, serde_json::to_value(query)?).await
    }

    async fn get_all_positions(&self) -> Result<Value> {
        self.client.get(endpoints::ALL_POSITIONS, Value::Null).await
    }

    async fn get_history_positions(&self, query: &PositionHistoryQuery) -> Result<Value> {
        self.client.get(endpoints::HISTORY_POSITIONS, serde_json::to_value(query)?).await
    }
}
