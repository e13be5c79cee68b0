//! Account setup and asset transfer requests.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::validate::{require_non_blank, require_positive_decimal};
use crate::error::Result;

/// User registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Referral code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrals: Option<String>,
}

impl CreateUserRequest {
    /// Referral code forwarded to the exchange; empty when absent.
    pub fn referral_code(&self) -> &str {
        self.referrals.as_deref().unwrap_or("")
    }
}

/// Enable trading for a spot pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnableSpotTradeRequest {
    /// Trading pair symbol
    pub symbol_name: String,
}

impl EnableSpotTradeRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("symbolName", &self.symbol_name)
    }
}

/// Enable trading for a perpetual contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnableContractTradeRequest {
    /// Contract name
    pub contract_name: String,
}

impl EnableContractTradeRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("contractName", &self.contract_name)
    }
}

/// Token spending approval, required before a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenApproval {
    /// Token name
    pub token_name: String,
    /// Approved amount
    pub amount: String,
}

impl TokenApproval {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("tokenName", &self.token_name)?;
        require_positive_decimal("amount", &self.amount)
    }
}

/// Deposit into or withdrawal from the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfer {
    /// Asset ID (can be obtained from the GetPublicInfo tool)
    pub asset_id: String,
    /// Transfer amount
    pub amount: String,
}

impl AssetTransfer {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("assetId", &self.asset_id)?;
        require_positive_decimal("amount", &self.amount)
    }
}
