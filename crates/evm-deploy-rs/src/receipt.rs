use crate::error::DeployHelperError;
use alloy::{
    primitives::{Address, TxHash},
    rpc::types::TransactionReceipt,
};

/// The slice of a transaction receipt that deployment cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub transaction_hash: TxHash,
    /// Address of the created contract, when the receipt carries one.
    pub contract_address: Option<Address>,
    pub block_number: Option<u64>,
    /// Execution status flag from the receipt.
    pub status: bool,
}

impl From<TransactionReceipt> for DeploymentReceipt {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            contract_address: receipt.contract_address,
            block_number: receipt.block_number,
            status: receipt.status(),
        }
    }
}

impl DeploymentReceipt {
    /// Extracts the deployed contract address from a successful receipt.
    pub fn deployed_address(&self) -> Result<Address, DeployHelperError> {
        if !self.status {
            return Err(DeployHelperError::TransactionFailed(
                "deployment transaction reverted".to_string(),
            ));
        }
        self.contract_address.ok_or_else(|| {
            DeployHelperError::TransactionFailed(
                "receipt carries no contract address".to_string(),
            )
        })
    }
}
