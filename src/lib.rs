//! LnExchange MCP Server Library
//!
//! A Model Context Protocol server for LnExchange spot and perpetual trading.
//! Each tool validates its input, forwards it unchanged to the exchange API
//! and returns the raw response as JSON text.
//!
//! # Features
//!
//! - **Market Data**: Public info, markets and user account queries
//! - **Account Setup**: User registration, trade enabling, token approval
//! - **Asset Transfers**: Deposits and withdrawals
//! - **Trading**: Order placement, cancellation and order/trade history
//! - **Perpetuals**: The same surface for contracts, plus positions
//!
//! # Example
//!
//! ```rust,ignore
//! use lnexchange_mcp::{Config, LnExchangeServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let server = LnExchangeServer::new(config)?;
//!     // Run server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod exchange;
pub mod mcp;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use exchange::{PerpetualApi, SpotApi};
pub use mcp::LnExchangeServer;
