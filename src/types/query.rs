//! Order, trade and position list queries.
//!
//! Pagination defaults (page 1, 10 items) are applied by the exchange; absent
//! fields are left out of the forwarded request.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::validate::{require_at_least_one, require_non_blank, require_time_range};
use crate::error::Result;

/// Current or trigger orders for a spot pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotOrderQuery {
    /// Trading pair symbol
    pub symbol_name: String,
    /// Page number (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Order type filter
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
}

impl SpotOrderQuery {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("symbolName", &self.symbol_name)?;
        require_at_least_one("page", self.page)?;
        require_at_least_one("limit", self.limit)
    }
}

/// Historical orders, trigger orders or trades for a spot pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotHistoryQuery {
    /// Trading pair symbol
    pub symbol_name: String,
    /// Page number (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Order type filter
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Start time filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    /// End time filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl SpotHistoryQuery {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("symbolName", &self.symbol_name)?;
        require_at_least_one("page", self.page)?;
        require_at_least_one("limit", self.limit)?;
        require_time_range(self.begin_time.as_deref(), self.end_time.as_deref())
    }
}

/// Current or trigger orders for a perpetual contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualOrderQuery {
    /// Contract name
    pub contract_name: String,
    /// Page number (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Order type filter
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
}

impl PerpetualOrderQuery {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractName", &self.contract_name)?;
        require_at_least_one("page", self.page)?;
        require_at_least_one("limit", self.limit)
    }
}

/// Historical orders, trigger orders or trades for a perpetual contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualHistoryQuery {
    /// Contract name
    pub contract_name: String,
    /// Page number (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Order type filter
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Start time filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    /// End time filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl PerpetualHistoryQuery {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractName", &self.contract_name)?;
        require_at_least_one("page", self.page)?;
        require_at_least_one("limit", self.limit)?;
        require_time_range(self.begin_time.as_deref(), self.end_time.as_deref())
    }
}

/// Closed positions for a perpetual contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionHistoryQuery {
    /// Contract ID
    pub contract_id: String,
    /// Page number (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PositionHistoryQuery {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractId", &self.contract_id)?;
        require_at_least_one("page", self.page)?;
        require_at_least_one("limit", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spot_order_query_omits_absent_fields() {
        let query: SpotOrderQuery =
            serde_json::from_value(json!({ "symbolName": "BTC-USDT" })).unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({ "symbolName": "BTC-USDT" }));
    }

    #[test]
    fn test_spot_order_query_rejects_zero_page() {
        let query = SpotOrderQuery {
            symbol_name: "BTC-USDT".into(),
            page: Some(0),
            limit: Some(10),
            order_type: None,
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_spot_history_query_wire_names() {
        let query = SpotHistoryQuery {
            symbol_name: "BTC-USDT".into(),
            page: Some(2),
            limit: Some(50),
            order_type: Some("1".into()),
            begin_time: Some("1700000000000".into()),
            end_time: Some("1700086400000".into()),
        };
        assert!(query.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "symbolName": "BTC-USDT",
                "page": 2,
                "limit": 50,
                "type": "1",
                "beginTime": "1700000000000",
                "endTime": "1700086400000"
            })
        );
    }

    #[test]
    fn test_history_query_inverted_range() {
        let query = PerpetualHistoryQuery {
            contract_name: "E-BTC-USDT".into(),
            page: None,
            limit: None,
            order_type: None,
            begin_time: Some("200".into()),
            end_time: Some("100".into()),
        };
        let err = query.validate().unwrap_err();
        assert!(err.to_string().contains("beginTime"));
    }

    #[test]
    fn test_negative_page_rejected_by_shape() {
        let result = serde_json::from_value::<PerpetualOrderQuery>(json!({
            "contractName": "E-BTC-USDT",
            "page": -1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_position_history_query() {
        let query: PositionHistoryQuery =
            serde_json::from_value(json!({ "contractId": "1", "limit": 20 })).unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "contractId": "1", "limit": 20 })
        );

        let blank = PositionHistoryQuery { contract_id: "".into(), page: None, limit: None };
        assert!(blank.validate().is_err());
    }
}
