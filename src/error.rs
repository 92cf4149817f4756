//! Unified error types for the SDK
//!
//! Every fallible operation returns `SdkResult<T>`. Failures are local and
//! synchronous: they point at a caller mistake (bad configuration, malformed
//! input, mismatched asset wiring), never at a transient condition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all SDK operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl SdkError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn asset_mismatch(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AssetMismatch, msg)
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == ErrorCode::InvalidArgument
    }

    pub fn is_asset_mismatch(&self) -> bool {
        self.code == ErrorCode::AssetMismatch
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for SdkError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidArgument,
    AssetMismatch,

    // Parse errors
    JsonError,
    HexError,

    // Configuration
    ConfigError,

    // Internal
    Internal,
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

// Conversions from common error types

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<std::io::Error> for SdkError {
    fn from(e: std::io::Error) -> Self {
        SdkError::new(ErrorCode::Internal, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = SdkError::asset_mismatch("cannot add hUSDC to USDC")
            .with_details("left: chain 42161, right: chain 1");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("asset_mismatch"));
        assert!(json.contains("cannot add hUSDC to USDC"));
    }

    #[test]
    fn test_display_includes_details() {
        let err = SdkError::invalid_argument("factory_address is empty").with_details("chain 42161");
        assert_eq!(
            err.to_string(),
            "[InvalidArgument] factory_address is empty (chain 42161)"
        );
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: SdkError = hex::decode("zz").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::HexError);
    }
}
