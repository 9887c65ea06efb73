use crate::error::DeployHelperError;
use crate::receipt::DeploymentReceipt;
use crate::rpc::RpcClient;
use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::RwLock;

use super::{mock_chain, mock_receipt};

/// Programmable RPC client double.
///
/// Each result slot overrides the corresponding call when set; unset slots
/// fall back to a plausible success. Sent transactions are recorded so tests
/// can assert what was (or was not) submitted.
pub struct MockRpcClient {
    chain_id_result: RwLock<Option<Result<u64, DeployHelperError>>>,
    send_transaction_result: RwLock<Option<Result<TxHash, DeployHelperError>>>,
    get_receipt_result: RwLock<Option<Result<Option<DeploymentReceipt>, DeployHelperError>>>,
    block_number_result: RwLock<Option<Result<u64, DeployHelperError>>>,
    sent: RwLock<Vec<TransactionRequest>>,
}

impl Default for MockRpcClient {
    fn default() -> Self {
        Self {
            chain_id_result: RwLock::new(None),
            send_transaction_result: RwLock::new(None),
            get_receipt_result: RwLock::new(None),
            block_number_result: RwLock::new(None),
            sent: RwLock::new(Vec::new()),
        }
    }
}

impl MockRpcClient {
    pub fn set_chain_id_result(&self, result: Result<u64, DeployHelperError>) {
        *self.chain_id_result.write().unwrap() = Some(result);
    }

    pub fn set_send_transaction_result(&self, result: Result<TxHash, DeployHelperError>) {
        *self.send_transaction_result.write().unwrap() = Some(result);
    }

    pub fn set_get_receipt_result(
        &self,
        result: Result<Option<DeploymentReceipt>, DeployHelperError>,
    ) {
        *self.get_receipt_result.write().unwrap() = Some(result);
    }

    pub fn set_block_number_result(&self, result: Result<u64, DeployHelperError>) {
        *self.block_number_result.write().unwrap() = Some(result);
    }

    /// Number of transactions submitted through this client.
    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn chain_id(&self) -> Result<u64, DeployHelperError> {
        let result = self.chain_id_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_chain().id),
        }
    }

    async fn block_number(&self) -> Result<u64, DeployHelperError> {
        let result = self.block_number_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(1),
        }
    }

    async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TxHash, DeployHelperError> {
        self.sent.write().unwrap().push(tx);
        let result = self.send_transaction_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(TxHash::with_last_byte(7)),
        }
    }

    async fn get_receipt(
        &self,
        _tx_hash: TxHash,
    ) -> Result<Option<DeploymentReceipt>, DeployHelperError> {
        let result = self.get_receipt_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(Some(mock_receipt(Some(Address::with_last_byte(9))))),
        }
    }
}
