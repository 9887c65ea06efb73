use crate::{
    chain::ChainInfo,
    error::DeployHelperError,
    receipt::DeploymentReceipt,
    rpc::{ExternalRpcClient, RpcClient},
};
use alloy::{network::EthereumWallet, primitives::TxHash, rpc::types::TransactionRequest};
use std::{sync::Arc, time::Duration};

/// Interval between receipt polls.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Poll attempts before the wait is treated as a transaction failure.
const RECEIPT_POLL_ATTEMPTS: u32 = 60;

#[derive(Clone)]
pub struct EnvConfigs {
    pub rpc_url: String,
    /// The single supported target network.
    pub chain: ChainInfo,
}

/// Connection to the target network: an RPC client plus its configuration.
#[derive(Clone)]
pub struct Env {
    pub(crate) rpc_client: Arc<dyn RpcClient>,
    pub(crate) configs: EnvConfigs,
}

impl Env {
    pub fn new(configs: EnvConfigs, wallet: EthereumWallet) -> Result<Self, DeployHelperError> {
        let client = ExternalRpcClient::new(&configs.rpc_url, wallet)?;
        Ok(Self {
            rpc_client: Arc::new(client),
            configs,
        })
    }

    /// Builds an environment around an existing client, e.g. a mock.
    pub fn with_client(rpc_client: Arc<dyn RpcClient>, configs: EnvConfigs) -> Self {
        Self {
            rpc_client,
            configs,
        }
    }

    pub fn chain(&self) -> &ChainInfo {
        &self.configs.chain
    }

    pub async fn chain_id(&self) -> Result<u64, DeployHelperError> {
        self.rpc_client.chain_id().await.map_err(|e| {
            DeployHelperError::NetworkRequestFailed(format!("Failed to get chain id: {}", e))
        })
    }

    pub async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TxHash, DeployHelperError> {
        self.rpc_client.send_transaction(tx).await.map_err(|e| {
            DeployHelperError::NetworkRequestFailed(format!("Failed to send transaction: {}", e))
        })
    }

    /// Polls until the transaction has reached the requested confirmation
    /// depth, or fails once the poll budget is exhausted.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<DeploymentReceipt, DeployHelperError> {
        let mut attempts = 0;
        loop {
            if let Some(receipt) = self.rpc_client.get_receipt(tx_hash).await? {
                if confirmations <= 1 {
                    return Ok(receipt);
                }
                let head = self.rpc_client.block_number().await?;
                if let Some(mined) = receipt.block_number {
                    if head + 1 >= mined + confirmations {
                        return Ok(receipt);
                    }
                }
            }

            attempts += 1;
            if attempts >= RECEIPT_POLL_ATTEMPTS {
                return Err(DeployHelperError::TransactionFailed(format!(
                    "timed out waiting for receipt of {}",
                    tx_hash
                )));
            }
            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{mock_chain, mock_receipt, rpc::MockRpcClient};
    use alloy::primitives::Address;

    fn env_with(client: MockRpcClient) -> Env {
        Env::with_client(
            Arc::new(client),
            EnvConfigs {
                rpc_url: "http://localhost:8545".to_string(),
                chain: mock_chain(),
            },
        )
    }

    #[tokio::test]
    async fn test_chain_id_delegates_to_client() {
        let env = env_with(MockRpcClient::default());
        assert_eq!(env.chain_id().await.unwrap(), mock_chain().id);
    }

    #[tokio::test]
    async fn test_chain_id_wraps_errors() {
        let client = MockRpcClient::default();
        client.set_chain_id_result(Err(DeployHelperError::NetworkRequestFailed(
            "boom".to_string(),
        )));
        let env = env_with(client);

        let err = env.chain_id().await.unwrap_err();
        assert!(err.to_string().contains("Failed to get chain id"));
    }

    #[tokio::test]
    async fn test_wait_for_receipt_single_confirmation() {
        let expected = mock_receipt(Some(Address::with_last_byte(9)));
        let client = MockRpcClient::default();
        client.set_get_receipt_result(Ok(Some(expected.clone())));
        let env = env_with(client);

        let receipt = env
            .wait_for_receipt(expected.transaction_hash, 1)
            .await
            .unwrap();
        assert_eq!(receipt, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_receipt_times_out() {
        let client = MockRpcClient::default();
        client.set_get_receipt_result(Ok(None));
        let env = env_with(client);

        let result = env.wait_for_receipt(TxHash::with_last_byte(1), 1).await;
        match result {
            Err(DeployHelperError::TransactionFailed(msg)) => {
                assert!(msg.contains("timed out"), "unexpected message: {}", msg);
            }
            other => panic!("expected a timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wait_for_receipt_confirmation_depth() {
        // Mined in block 1; three confirmations need the head at block 3.
        let expected = mock_receipt(Some(Address::with_last_byte(9)));
        let client = MockRpcClient::default();
        client.set_get_receipt_result(Ok(Some(expected.clone())));
        client.set_block_number_result(Ok(3));
        let env = env_with(client);

        let receipt = env
            .wait_for_receipt(expected.transaction_hash, 3)
            .await
            .unwrap();
        assert_eq!(receipt, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_receipt_insufficient_depth_times_out() {
        let expected = mock_receipt(Some(Address::with_last_byte(9)));
        let client = MockRpcClient::default();
        client.set_get_receipt_result(Ok(Some(expected.clone())));
        client.set_block_number_result(Ok(1));
        let env = env_with(client);

        let result = env.wait_for_receipt(expected.transaction_hash, 3).await;
        assert!(matches!(
            result,
            Err(DeployHelperError::TransactionFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_wait_for_receipt_propagates_rpc_errors() {
        let client = MockRpcClient::default();
        client.set_get_receipt_result(Err(DeployHelperError::NetworkRequestFailed(
            "gone".to_string(),
        )));
        let env = env_with(client);

        let result = env.wait_for_receipt(TxHash::with_last_byte(1), 1).await;
        assert!(matches!(
            result,
            Err(DeployHelperError::NetworkRequestFailed(_))
        ));
    }
}
