//! REST endpoint paths, relative to the configured base URL.
//!
//! Spot and perpetual services expose the same layout on different hosts,
//! apart from the position endpoints which only exist for perpetuals.
//!
//! No published LnExchange REST reference backs these paths. They describe
//! the layout this client speaks, and a deployment that lays its routes out
//! differently will answer with errors. Point `--spot-url` /
//! `--perpetual-url` at a service that serves this layout.

pub const PUBLIC_INFO: &str = "/api/v1/public/info";
pub const ALL_MARKETS: &str = "/api/v1/public/markets";
pub const USER_INFO: &str = "/api/v1/user/info";
pub const CREATE_USER: &str = "/api/v1/user/create";
pub const ENABLE_TRADE: &str = "/api/v1/user/enable-trade";
pub const APPROVE: &str = "/api/v1/asset/approve";
pub const DEPOSIT: &str = "/api/v1/asset/deposit";
pub const WITHDRAW: &str = "/api/v1/asset/withdraw";
pub const CREATE_ORDER: &str = "/api/v1/order/create";
pub const CANCEL_ORDER: &str = "/api/v1/order/cancel";
pub const CANCEL_ALL_ORDERS: &str = "/api/v1/order/cancel-all";
pub const CURRENT_ORDERS: &str = "/api/v1/order/current";
pub const TRIGGER_ORDERS: &str = "/api/v1/order/trigger";
pub const HISTORY_ORDERS: &str = "/api/v1/order/history";
pub const HISTORY_TRIGGER_ORDERS: &str = "/api/v1/order/trigger-history";
pub const TRADE_HISTORY: &str = "/api/v1/trade/history";
pub const ALL_POSITIONS: &str = "/api/v1/position/all";
pub const HISTORY_POSITIONS: &str = "/api/v1/position/history";
