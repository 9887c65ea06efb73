use crate::error::DeployHelperError;
use crate::wallet::{ConnectorInfo, WalletSession};
use alloy::primitives::Address;
use async_trait::async_trait;
use std::sync::RwLock;

/// Programmable wallet session double.
///
/// Chain-switch requests are recorded (and honored unless a failure is
/// programmed), so tests can assert the orchestrator asked for a switch
/// without submitting anything.
pub struct MockWalletSession {
    address: RwLock<Option<Address>>,
    chain_id: RwLock<Option<u64>>,
    switch_chain_result: RwLock<Option<Result<(), DeployHelperError>>>,
    switch_requests: RwLock<Vec<u64>>,
}

impl MockWalletSession {
    /// A session already connected on the given chain.
    pub fn connected(chain_id: u64) -> Self {
        Self {
            address: RwLock::new(Some(Address::with_last_byte(1))),
            chain_id: RwLock::new(Some(chain_id)),
            switch_chain_result: RwLock::new(None),
            switch_requests: RwLock::new(Vec::new()),
        }
    }

    /// A session with no connected account.
    pub fn disconnected() -> Self {
        Self {
            address: RwLock::new(None),
            chain_id: RwLock::new(None),
            switch_chain_result: RwLock::new(None),
            switch_requests: RwLock::new(Vec::new()),
        }
    }

    pub fn set_switch_chain_result(&self, result: Result<(), DeployHelperError>) {
        *self.switch_chain_result.write().unwrap() = Some(result);
    }

    pub fn switch_requests(&self) -> Vec<u64> {
        self.switch_requests.read().unwrap().clone()
    }
}

#[async_trait]
impl WalletSession for MockWalletSession {
    fn address(&self) -> Option<Address> {
        *self.address.read().unwrap()
    }

    fn chain_id(&self) -> Option<u64> {
        *self.chain_id.read().unwrap()
    }

    fn chain_name(&self) -> Option<String> {
        self.chain_id().map(|id| format!("chain-{}", id))
    }

    fn connectors(&self) -> Vec<ConnectorInfo> {
        vec![ConnectorInfo {
            id: "mock".to_string(),
            name: "Mock wallet".to_string(),
            connecting: false,
        }]
    }

    async fn connect(&self, _connector_id: &str) -> Result<(), DeployHelperError> {
        *self.address.write().unwrap() = Some(Address::with_last_byte(1));
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DeployHelperError> {
        *self.address.write().unwrap() = None;
        *self.chain_id.write().unwrap() = None;
        Ok(())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), DeployHelperError> {
        self.switch_requests.write().unwrap().push(chain_id);
        let programmed = self.switch_chain_result.read().unwrap();
        match programmed.as_ref() {
            Some(res) => res.clone(),
            None => {
                *self.chain_id.write().unwrap() = Some(chain_id);
                Ok(())
            }
        }
    }
}
