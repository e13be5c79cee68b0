//! Common utilities for integration tests.
//!
//! The mock clients record every call (method name plus the arguments as
//! JSON) and answer with a canned response.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lnexchange_mcp::{
    types::{
        PerpetualCancelAllRequest, PerpetualCancelRequest, PerpetualHistoryQuery,
        PerpetualOrderQuery, PerpetualOrderRequest, PositionHistoryQuery, SpotCancelAllRequest,
        SpotCancelRequest, SpotHistoryQuery, SpotOrderQuery, SpotOrderRequest,
    },
    AppError, Config, LnExchangeServer, PerpetualApi, Result, SpotApi,
};
use serde::Serialize;
use serde_json::{json, Value};

/// One recorded client call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub args: Value,
}

/// Shared call log and canned reply.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
    fail_with: Mutex<Option<(u16, String)>>,
}

impl Recorder {
    fn record<T: Serialize>(&self, method: &'static str, args: T) -> Result<Value> {
        let args = serde_json::to_value(args).expect("args serialize");
        self.calls.lock().unwrap().push(Call { method, args: args.clone() });

        if let Some((status, body)) = self.fail_with.lock().unwrap().clone() {
            return Err(AppError::Api { status, body });
        }
        Ok(json!({ "code": "0", "msg": "suc", "method": method, "echo": args }))
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with an exchange error.
    pub fn fail_with(&self, status: u16, body: &str) {
        *self.fail_with.lock().unwrap() = Some((status, body.to_string()));
    }
}

#[derive(Default, Clone)]
pub struct MockSpot {
    pub recorder: Arc<Recorder>,
}

#[async_trait]
impl SpotApi for MockSpot {
    async fn fetch_public_info(&self) -> Result<Value> {
        self.recorder.record("fetch_public_info", Value::Null)
    }
    async fn get_all_markets(&self) -> Result<Value> {
        self.recorder.record("get_all_markets", Value::Null)
    }
    async fn get_user_info(&self) -> Result<Value> {
        self.recorder.record("get_user_info", Value::Null)
    }
    async fn create_user(&self, referrals: &str) -> Result<Value> {
        self.recorder.record("create_user", json!({ "referrals": referrals }))
    }
    async fn enable_trade(&self, symbol_name: &str) -> Result<Value> {
        self.recorder.record("enable_trade", json!({ "symbolName": symbol_name }))
    }
    async fn approve(&self, token_name: &str, amount: &str) -> Result<Value> {
        self.recorder.record("approve", json!({ "tokenName": token_name, "amount": amount }))
    }
    async fn deposit(&self, asset_id: &str, amount: &str) -> Result<Value> {
        self.recorder.record("deposit", json!({ "assetId": asset_id, "amount": amount }))
    }
    async fn withdraw(&self, asset_id: &str, amount: &str) -> Result<Value> {
        self.recorder.record("withdraw", json!({ "assetId": asset_id, "amount": amount }))
    }
    async fn create_order(&self, order: &SpotOrderRequest) -> Result<Value> {
        self.recorder.record("create_order", order)
    }
    async fn cancel_order(&self, cancel: &SpotCancelRequest) -> Result<Value> {
        self.recorder.record("cancel_order", cancel)
    }
    async fn cancel_all_orders(&self, cancel: &SpotCancelAllRequest) -> Result<Value> {
        self.recorder.record("cancel_all_orders", cancel)
    }
    async fn current_order_list(&self, query: &SpotOrderQuery) -> Result<Value> {
        self.recorder.record("current_order_list", query)
    }
    async fn trigger_order_list(&self, query: &SpotOrderQuery) -> Result<Value> {
        self.recorder.record("trigger_order_list", query)
    }
    async fn history_order_list(&self, query: &SpotHistoryQuery) -> Result<Value> {
        self.recorder.record("history_order_list", query)
    }
    async fn history_trigger_order_list(&self, query: &SpotHistoryQuery) -> Result<Value> {
        self.recorder.record("history_trigger_order_list", query)
    }
    async fn his_trade_list(&self, query: &SpotHistoryQuery) -> Result<Value> {
        self.recorder.record("his_trade_list", query)
    }
}

#[derive(Default, Clone)]
pub struct MockPerpetual {
    pub recorder: Arc<Recorder>,
}

#[async_trait]
impl PerpetualApi for MockPerpetual {
    async fn fetch_public_info(&self) -> Result<Value> {
        self.recorder.record("fetch_public_info", Value::Null)
    }
    async fn get_all_markets(&self) -> Result<Value> {
        self.recorder.record("get_all_markets", Value::Null)
    }
    async fn get_user_info(&self) -> Result<Value> {
        self.recorder.record("get_user_info", Value::Null)
    }
    async fn create_user(&self, referrals: &str) -> Result<Value> {
        self.recorder.record("create_user", json!({ "referrals": referrals }))
    }
    async fn enable_trade(&self, contract_name: &str) -> Result<Value> {
        self.recorder.record("enable_trade", json!({ "contractName": contract_name }))
    }
    async fn approve(&self, token_name: &str, amount: &str) -> Result<Value> {
        self.recorder.record("approve", json!({ "tokenName": token_name, "amount": amount }))
    }
    async fn deposit(&self, asset_id: &str, amount: &str) -> Result<Value> {
        self.recorder.record("deposit", json!({ "assetId": asset_id, "amount": amount }))
    }
    async fn withdraw(&self, asset_id: &str, amount: &str) -> Result<Value> {
        self.recorder.record("withdraw", json!({ "assetId": asset_id, "amount": amount }))
    }
    async fn create_order(&self, order: &PerpetualOrderRequest) -> Result<Value> {
        self.recorder.record("create_order", order)
    }
    async fn cancel_order(&self, cancel: &PerpetualCancelRequest) -> Result<Value> {
        self.recorder.record("cancel_order", cancel)
    }
    async fn cancel_all_orders(&self, cancel: &PerpetualCancelAllRequest) -> Result<Value> {
        self.recorder.record("cancel_all_orders", cancel)
    }
    async fn current_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value> {
        self.recorder.record("current_order_list", query)
    }
    async fn trigger_order_list(&self, query: &PerpetualOrderQuery) -> Result<Value> {
        self.recorder.record("trigger_order_list", query)
    }
    async fn history_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.recorder.record("history_order_list", query)
    }
    async fn history_trigger_order_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.recorder.record("history_trigger_order_list", query)
    }
    async fn his_trade_list(&self, query: &PerpetualHistoryQuery) -> Result<Value> {
        self.recorder.record("his_trade_list", query)
    }
    async fn get_all_positions(&self) -> Result<Value> {
        self.recorder.record("get_all_positions", Value::Null)
    }
    async fn get_history_positions(&self, query: &PositionHistoryQuery) -> Result<Value> {
        self.recorder.record("get_history_positions", query)
    }
}

/// Server wired to mock clients, with perpetual tools enabled.
pub fn mock_server() -> (LnExchangeServer, Arc<Recorder>, Arc<Recorder>) {
    let spot = MockSpot::default();
    let perpetual = MockPerpetual::default();
    let spot_calls = spot.recorder.clone();
    let perpetual_calls = perpetual.recorder.clone();

    let server = LnExchangeServer::with_clients(Arc::new(spot), Some(Arc::new(perpetual)));
    (server, spot_calls, perpetual_calls)
}

/// Server wired to a mock spot client only.
pub fn spot_only_server() -> (LnExchangeServer, Arc<Recorder>) {
    let spot = MockSpot::default();
    let calls = spot.recorder.clone();
    (LnExchangeServer::with_clients(Arc::new(spot), None), calls)
}

/// Assert exactly one call was made, and return it.
pub fn single_call(recorder: &Recorder) -> Call {
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1, "expected exactly one client call, got {:?}", calls);
    calls.into_iter().next().unwrap()
}

/// Helper to create a live server from environment variables.
pub fn create_live_server() -> Option<LnExchangeServer> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let private_key = std::env::var("LNEXCHANGE_PRIVATE_KEY").ok()?;
    if private_key.is_empty() {
        return None;
    }

    let config = Config::try_parse_from(["lnexchange-mcp", private_key.as_str()]).ok()?;
    LnExchangeServer::new(config).ok()
}

/// Skip test if a live server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_live_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: LNEXCHANGE_PRIVATE_KEY not set");
                return;
            }
        }
    };
}
