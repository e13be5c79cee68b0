//! MCP server module.
//!
//! Contains the MCP server implementation with spot and perpetual tool
//! handlers.

mod perpetual_tools;
pub mod server;
mod spot_tools;

pub use server::LnExchangeServer;
