use alloy::primitives::Address;

/// Identity of the single supported target network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    /// Numeric chain id (EIP-155).
    pub id: u64,
    /// Human-readable network name.
    pub name: String,
    /// Base URL of the block explorer, without a trailing slash.
    pub explorer_url: String,
}

impl ChainInfo {
    pub fn new(id: u64, name: &str, explorer_url: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            explorer_url: explorer_url.trim_end_matches('/').to_string(),
        }
    }

    /// The Sepolia test network, the default deployment target.
    pub fn sepolia() -> Self {
        Self::new(11155111, "Sepolia", "https://sepolia.etherscan.io")
    }

    /// Builds the explorer page URL for a deployed contract address.
    pub fn address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }
}
