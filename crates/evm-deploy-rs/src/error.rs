//! # Deployment Error Handling
//!
//! This module defines the error types used throughout the deployment helpers
//! library. It provides a unified error handling approach for argument
//! coercion, validation, and all operations against the wallet/RPC stack.
use std::{error::Error, fmt};

/// Errors that can occur when using the deployment helpers library.
///
/// This enum covers errors raised locally by constructor-argument validation
/// as well as errors surfaced by the wallet and RPC collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployHelperError {
    /// Error when a required constructor parameter is unset or empty.
    MissingParameter(String),

    /// Error when an address-typed parameter does not match `0x` + 40 hex digits.
    InvalidAddressFormat(String),

    /// Error when an invalid argument is provided to a function.
    InvalidArgument(String),

    /// Error when ABI encoding of constructor arguments fails.
    AbiEncodingFailed(String),

    /// Error when a network request to the RPC server fails.
    NetworkRequestFailed(String),

    /// Error when a submitted transaction fails or its receipt is unusable.
    TransactionFailed(String),

    /// Error when a wallet operation (connect, disconnect, chain switch) fails.
    WalletRequestFailed(String),

    /// Error when a file operation fails.
    FileReadError(String),

    /// Error when a conversion fails.
    ConversionError(String),
}

impl fmt::Display for DeployHelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(name) => write!(f, "Missing required parameter: {}", name),
            Self::InvalidAddressFormat(name) => {
                write!(f, "Invalid address format for parameter: {}", name)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::AbiEncodingFailed(msg) => write!(f, "ABI encoding failed: {}", msg),
            Self::NetworkRequestFailed(msg) => write!(f, "Network request failed: {}", msg),
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            Self::WalletRequestFailed(msg) => write!(f, "Wallet request failed: {}", msg),
            Self::FileReadError(msg) => write!(f, "File read error: {}", msg),
            Self::ConversionError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl Error for DeployHelperError {}

/// Convert dyn-ABI errors into DeployHelperError
impl From<alloy::dyn_abi::Error> for DeployHelperError {
    fn from(err: alloy::dyn_abi::Error) -> Self {
        Self::AbiEncodingFailed(err.to_string())
    }
}

/// Convert IO errors into DeployHelperError
impl From<std::io::Error> for DeployHelperError {
    fn from(err: std::io::Error) -> Self {
        Self::FileReadError(err.to_string())
    }
}

/// Convert JSON errors into DeployHelperError
impl From<serde_json::Error> for DeployHelperError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConversionError(err.to_string())
    }
}
