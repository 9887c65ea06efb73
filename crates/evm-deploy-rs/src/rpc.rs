//! # EVM RPC Client
//!
//! This module provides the RPC client used to talk to the target network.
//! It defines a trait for the operations deployment needs and a concrete
//! implementation over an alloy HTTP provider, allowing mock implementations
//! for testing.
use crate::{error::DeployHelperError, receipt::DeploymentReceipt};
use alloy::{
    network::EthereumWallet,
    primitives::TxHash,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    transports::http::reqwest::Url,
};

/// Interface for the RPC operations a deployment session performs.
///
/// The orchestrator only ever sees this trait, so tests can substitute a
/// mock implementation.
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    async fn chain_id(&self) -> Result<u64, DeployHelperError>;
    async fn block_number(&self) -> Result<u64, DeployHelperError>;
    async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TxHash, DeployHelperError>;
    async fn get_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<DeploymentReceipt>, DeployHelperError>;
}

/// RPC client backed by an alloy provider with the wallet filler attached.
pub struct ExternalRpcClient {
    provider: DynProvider,
}

impl ExternalRpcClient {
    /// Creates a client connected over HTTP to the given RPC URL, signing
    /// submitted transactions with the given wallet.
    pub fn new(url: &str, wallet: EthereumWallet) -> Result<Self, DeployHelperError> {
        let url: Url = url.parse().map_err(|e| {
            DeployHelperError::NetworkRequestFailed(format!("Invalid RPC URL: {}", e))
        })?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url)
            .erased();
        Ok(Self { provider })
    }
}

#[async_trait::async_trait]
impl RpcClient for ExternalRpcClient {
    async fn chain_id(&self) -> Result<u64, DeployHelperError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }

    async fn block_number(&self) -> Result<u64, DeployHelperError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }

    /// Submits the transaction and returns its hash without waiting for
    /// inclusion.
    async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TxHash, DeployHelperError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))?;
        Ok(*pending.tx_hash())
    }

    async fn get_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<DeploymentReceipt>, DeployHelperError> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))?;
        Ok(receipt.map(DeploymentReceipt::from))
    }
}
