mod chain;
mod coerce;
mod env;
mod error;
mod mock;
mod receipt;
mod registry;
mod rpc;
mod session;
mod transaction;
mod wallet;

pub use chain::ChainInfo;
pub use coerce::{
    coerce, constructor_call_values, is_address_format, validate_constructor_args, ArgValue,
};
pub use env::{Env, EnvConfigs};
pub use error::DeployHelperError;
pub use receipt::DeploymentReceipt;
pub use registry::{ConstructorInput, ContractDescriptor, ContractRegistry};
pub use rpc::{ExternalRpcClient, RpcClient};
pub use session::{DeployPhase, DeploySession, DeploymentResult};
pub use transaction::DeployTransactionBuilder;
pub use wallet::{ConnectorInfo, KeyWallet, WalletSession, KEY_WALLET_CONNECTOR_ID};

// Re-export mock utilities for testing
pub use mock::{
    mock_chain, mock_descriptor_no_constructor, mock_descriptor_with_constructor, mock_receipt,
    mock_registry, rpc::MockRpcClient, wallet::MockWalletSession,
};

// re-exports
pub use alloy::json_abi::JsonAbi;
pub use alloy::network::EthereumWallet;
pub use alloy::primitives::{Address, Bytes, TxHash, U256};
pub use alloy::signers::local::PrivateKeySigner;
