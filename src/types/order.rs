//! Order placement and cancellation requests.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::validate::{require_non_blank, require_positive_decimal, require_side};
use crate::error::{AppError, Result};

/// Exchange order type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Limit order (code 1).
    Limit,
    /// Market order (code 2).
    Market,
    /// Immediate-or-cancel (code 3).
    Ioc,
    /// Fill-or-kill (code 4).
    Fok,
    /// Post-only (code 5).
    PostOnly,
}

impl OrderType {
    /// Wire code for this order type.
    pub fn code(self) -> u8 {
        match self {
            OrderType::Limit => 1,
            OrderType::Market => 2,
            OrderType::Ioc => 3,
            OrderType::Fok => 4,
            OrderType::PostOnly => 5,
        }
    }
}

impl std::str::FromStr for OrderType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(OrderType::Limit),
            "2" => Ok(OrderType::Market),
            "3" => Ok(OrderType::Ioc),
            "4" => Ok(OrderType::Fok),
            "5" => Ok(OrderType::PostOnly),
            _ => Err(AppError::Validation(format!(
                "type must be an order type code 1-5 (1 limit, 2 market, 3 IOC, 4 FOK, 5 POST_ONLY), got '{}'",
                s
            ))),
        }
    }
}

/// Shared checks for side, type, volume and price.
///
/// Price stays optional for every order type; the exchange decides whether
/// an order without one is acceptable.
fn validate_order_fields(
    side: &str,
    order_type: &str,
    volume: &str,
    price: Option<&str>,
) -> Result<()> {
    require_side(side)?;
    order_type.parse::<OrderType>()?;
    require_positive_decimal("volume", volume)?;

    if let Some(price) = price {
        require_positive_decimal("price", price)?;
    }
    Ok(())
}

/// Spot order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotOrderRequest {
    /// Trading pair symbol, e.g. BTC-USDT
    pub symbol: String,
    /// Trade direction: BUY/SELL
    pub side: String,
    /// Order type: e.g. 1(1 limit, 2 market, 3 IOC, 4 FOK, 5 POST_ONLY)
    #[serde(rename = "type")]
    pub order_type: String,
    /// Trade quantity
    pub volume: String,
    /// Limit order price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl SpotOrderRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("symbol", &self.symbol)?;
        validate_order_fields(&self.side, &self.order_type, &self.volume, self.price.as_deref())
    }
}

/// Spot order cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotCancelRequest {
    /// Order ID
    pub order_id: String,
    /// Trading pair symbol
    pub symbol_name: String,
}

impl SpotCancelRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("orderId", &self.order_id)?;
        require_non_blank("symbolName", &self.symbol_name)
    }
}

/// Cancel every open spot order, optionally for one pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotCancelAllRequest {
    /// Optional, specify trading pair symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl SpotCancelAllRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(symbol) = &self.symbol {
            require_non_blank("symbol", symbol)?;
        }
        Ok(())
    }
}

/// Perpetual order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualOrderRequest {
    /// Contract name
    pub contract_name: String,
    /// Trade direction: BUY/SELL
    pub side: String,
    /// Order type: e.g. 1(1 limit, 2 market, 3 IOC, 4 FOK, 5 POST_ONLY)
    #[serde(rename = "type")]
    pub order_type: String,
    /// Trade quantity
    pub volume: String,
    /// Limit order price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Position type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    /// Leverage level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage_level: Option<String>,
}

impl PerpetualOrderRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractName", &self.contract_name)?;
        validate_order_fields(&self.side, &self.order_type, &self.volume, self.price.as_deref())?;

        if let Some(position_type) = &self.position_type {
            require_non_blank("positionType", position_type)?;
        }

        if let Some(leverage) = &self.leverage_level {
            require_non_blank("leverageLevel", leverage)?;
        }
        Ok(())
    }
}

/// Perpetual order cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualCancelRequest {
    /// Contract name
    pub contract_name: String,
    /// Order ID
    pub order_id: String,
}

impl PerpetualCancelRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractName", &self.contract_name)?;
        require_non_blank("orderId", &self.order_id)
    }
}

/// Cancel every open perpetual order, optionally for one contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualCancelAllRequest {
    /// Contract name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
}

impl PerpetualCancelAllRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(contract) = &self.contract_name {
            require_non_blank("contractName", contract)?;
        }
        Ok(())
    }
}
