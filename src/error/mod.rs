//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signing key errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Tool input failed shape validation.
    #[error("Invalid parameter: {0}")]
    Validation(String),

    /// Transport errors talking to the exchange.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The exchange answered with a non-success status.
    #[error("Exchange API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A perpetual tool was called without a perpetual client.
    #[error("Perpetual trading is not configured")]
    PerpetualDisabled,
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<alloy::signers::Error> for AppError {
    fn from(err: alloy::signers::Error) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(_) => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) | AppError::PerpetualDisabled => {
                McpError::invalid_request(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("Missing private key".to_string());
        assert_eq!(err.to_string(), "Configuration error: Missing private key");
    }

    #[test]
    fn test_app_error_validation_display() {
        let err = AppError::Validation("side must be BUY or SELL".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: side must be BUY or SELL");
    }

    #[test]
    fn test_app_error_api_display() {
        let err = AppError::Api { status: 400, body: r#"{"code":"10001"}"#.to_string() };
        assert!(err.to_string().contains("status 400"));
        assert!(err.to_string().contains(r#"{"code":"10001"}"#));
    }

    #[test]
    fn test_app_error_perpetual_disabled_display() {
        assert_eq!(AppError::PerpetualDisabled.to_string(), "Perpetual trading is not configured");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = parse_err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_params() {
        let mcp_err: McpError = AppError::Validation("bad volume".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_request() {
        let mcp_err: McpError = AppError::Config("config error".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_REQUEST);

        let mcp_err: McpError = AppError::PerpetualDisabled.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_REQUEST);
    }

    #[test]
    fn test_app_error_to_mcp_error_internal_error() {
        let mcp_err: McpError = AppError::Http("connection refused".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);

        let mcp_err: McpError = AppError::Api { status: 500, body: "oops".to_string() }.into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);

        let mcp_err: McpError = AppError::Parse("unexpected eof".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_mcp_error_message_preserved() {
        let err = AppError::Http("Connection refused".to_string());
        let mcp_err: McpError = err.into();
        assert!(mcp_err.message.contains("Connection refused"));
        assert!(mcp_err.data.is_none());
    }
}
