//! Test doubles and fixtures for the deployment helpers.
pub mod rpc;
pub mod wallet;

use crate::{
    chain::ChainInfo,
    receipt::DeploymentReceipt,
    registry::{ContractDescriptor, ContractRegistry},
};
use alloy::primitives::{Address, Bytes, TxHash};

/// A local development chain.
pub fn mock_chain() -> ChainInfo {
    ChainInfo::new(31337, "Local", "http://localhost:4000")
}

/// Descriptor with a two-parameter constructor (`count: uint256`, `owner: address`).
pub fn mock_descriptor_with_constructor() -> ContractDescriptor {
    let abi = serde_json::from_str(
        r#"[
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "count", "type": "uint256", "internalType": "uint256" },
                    { "name": "owner", "type": "address", "internalType": "address" }
                ]
            }
        ]"#,
    )
    .expect("static ABI parses");

    ContractDescriptor {
        id: "counter".to_string(),
        name: "Counter".to_string(),
        description: "Stores a single number".to_string(),
        abi,
        bytecode: Bytes::from(hex::decode("6080604052").expect("static bytecode decodes")),
    }
}

/// Descriptor with no constructor entry at all.
pub fn mock_descriptor_no_constructor() -> ContractDescriptor {
    ContractDescriptor {
        id: "pinger".to_string(),
        name: "Pinger".to_string(),
        description: "No constructor arguments".to_string(),
        abi: alloy::json_abi::JsonAbi::new(),
        bytecode: Bytes::from(hex::decode("60806040").expect("static bytecode decodes")),
    }
}

pub fn mock_registry() -> ContractRegistry {
    ContractRegistry::new(vec![
        mock_descriptor_with_constructor(),
        mock_descriptor_no_constructor(),
    ])
}

/// A successful receipt for the given deployed address.
pub fn mock_receipt(contract_address: Option<Address>) -> DeploymentReceipt {
    DeploymentReceipt {
        transaction_hash: TxHash::with_last_byte(7),
        contract_address,
        block_number: Some(1),
        status: true,
    }
}
