use crate::wallet::WalletError;
use fhevm_types::{HandleError, UnsupportedKindError};
use thiserror::Error;

/// Error type for the FHEVM SDK
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Session is not initialized. Call init() first")]
    UninitializedSession,

    #[error("Unsupported encryption type: {0}")]
    UnsupportedKind(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Encryption error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<UnsupportedKindError> for SdkError {
    fn from(e: UnsupportedKindError) -> Self {
        SdkError::UnsupportedKind(e.0)
    }
}

impl From<HandleError> for SdkError {
    fn from(e: HandleError) -> Self {
        SdkError::Validation(e.to_string())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Network(e.to_string())
    }
}

impl From<config::ConfigError> for SdkError {
    fn from(e: config::ConfigError) -> Self {
        SdkError::Config(e.to_string())
    }
}

/// Result type for the FHEVM SDK
pub type Result<T> = std::result::Result<T, SdkError>;
