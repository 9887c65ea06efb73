//! # Wallet Session
//!
//! Abstraction over the injected wallet provider: connection lifecycle,
//! the connector list, the active account, the wallet's current network,
//! and the chain-switch capability. Signing and key custody stay inside the
//! implementation; the deployment session never touches key material.
use crate::error::DeployHelperError;
use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use std::sync::RwLock;

/// One available wallet connector, as shown in a connect menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorInfo {
    pub id: String,
    pub name: String,
    /// Transient flag while a connection attempt is in flight.
    pub connecting: bool,
}

/// Interface to the injected wallet provider.
#[async_trait::async_trait]
pub trait WalletSession: Send + Sync {
    /// Currently connected account, if any.
    fn address(&self) -> Option<Address>;
    /// Chain the wallet is currently on, if connected.
    fn chain_id(&self) -> Option<u64>;
    /// Display name of the wallet's current chain, when known.
    fn chain_name(&self) -> Option<String>;
    /// Connectors this wallet provider offers.
    fn connectors(&self) -> Vec<ConnectorInfo>;

    async fn connect(&self, connector_id: &str) -> Result<(), DeployHelperError>;
    async fn disconnect(&self) -> Result<(), DeployHelperError>;
    /// Asks the wallet to move to the given chain.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), DeployHelperError>;
}

pub const KEY_WALLET_CONNECTOR_ID: &str = "local-key";

struct KeyWalletState {
    connected: bool,
    chain_id: u64,
    chain_name: Option<String>,
}

/// Wallet session backed by a local private key, for scripts and tests.
///
/// Chain switches are honored immediately by updating the session's notion
/// of the active chain; there is no external wallet to wait on.
pub struct KeyWallet {
    signer: PrivateKeySigner,
    state: RwLock<KeyWalletState>,
}

impl KeyWallet {
    pub fn new(signer: PrivateKeySigner, chain_id: u64, chain_name: &str) -> Self {
        Self {
            signer,
            state: RwLock::new(KeyWalletState {
                connected: false,
                chain_id,
                chain_name: Some(chain_name.to_string()),
            }),
        }
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

#[async_trait::async_trait]
impl WalletSession for KeyWallet {
    fn address(&self) -> Option<Address> {
        let state = self.state.read().unwrap();
        state.connected.then(|| self.signer.address())
    }

    fn chain_id(&self) -> Option<u64> {
        let state = self.state.read().unwrap();
        state.connected.then_some(state.chain_id)
    }

    fn chain_name(&self) -> Option<String> {
        let state = self.state.read().unwrap();
        if state.connected {
            state.chain_name.clone()
        } else {
            None
        }
    }

    fn connectors(&self) -> Vec<ConnectorInfo> {
        vec![ConnectorInfo {
            id: KEY_WALLET_CONNECTOR_ID.to_string(),
            name: "Local key".to_string(),
            connecting: false,
        }]
    }

    async fn connect(&self, connector_id: &str) -> Result<(), DeployHelperError> {
        if connector_id != KEY_WALLET_CONNECTOR_ID {
            return Err(DeployHelperError::WalletRequestFailed(format!(
                "unknown connector: {}",
                connector_id
            )));
        }
        self.state.write().unwrap().connected = true;
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DeployHelperError> {
        self.state.write().unwrap().connected = false;
        Ok(())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), DeployHelperError> {
        let mut state = self.state.write().unwrap();
        if !state.connected {
            return Err(DeployHelperError::WalletRequestFailed(
                "not connected".to_string(),
            ));
        }
        if state.chain_id != chain_id {
            state.chain_id = chain_id;
            // The display name of the new chain is not tracked here.
            state.chain_name = None;
        }
        Ok(())
    }
}
