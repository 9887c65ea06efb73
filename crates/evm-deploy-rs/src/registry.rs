//! # Contract Registry
//!
//! Static, read-only catalogue of the contract definitions a session can
//! deploy. The registry is deserialized once from a JSON document (or file)
//! and never mutated afterwards; each entry carries the display metadata,
//! the JSON ABI, and the compiled deployment bytecode.
use crate::error::DeployHelperError;
use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;
use std::fs;

/// A predefined smart-contract definition available for deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractDescriptor {
    /// Stable identifier, unique within the registry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short human-readable description.
    pub description: String,
    /// The contract's interface descriptor, including zero or one constructor entry.
    pub abi: JsonAbi,
    /// Compiled creation bytecode, hex-encoded with a `0x` prefix in JSON.
    pub bytecode: Bytes,
}

/// A single constructor parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInput {
    /// Parameter name, unique within the constructor.
    pub name: String,
    /// Solidity type tag, e.g. `uint256`, `address`, `bool`, `string[]`.
    pub solidity_type: String,
}

impl ContractDescriptor {
    /// Returns the constructor parameters declared by the ABI, in order.
    ///
    /// Contracts without a constructor entry (or with a parameterless one)
    /// yield an empty list.
    pub fn constructor_inputs(&self) -> Vec<ConstructorInput> {
        self.abi
            .constructor()
            .map(|constructor| {
                constructor
                    .inputs
                    .iter()
                    .map(|param| ConstructorInput {
                        name: param.name.clone(),
                        solidity_type: param.ty.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_constructor_params(&self) -> bool {
        !self.constructor_inputs().is_empty()
    }
}

/// Ordered collection of contract descriptors, loaded once.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    contracts: Vec<ContractDescriptor>,
}

impl ContractRegistry {
    pub fn new(contracts: Vec<ContractDescriptor>) -> Self {
        Self { contracts }
    }

    /// Parses a registry from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, DeployHelperError> {
        let contracts: Vec<ContractDescriptor> = serde_json::from_str(json)?;
        Ok(Self { contracts })
    }

    /// Reads and parses a registry file.
    pub fn from_file(path: &str) -> Result<Self, DeployHelperError> {
        let json = fs::read_to_string(path)
            .map_err(|e| DeployHelperError::FileReadError(format!("{}: {}", path, e)))?;
        Self::from_json(&json)
    }

    pub fn contracts(&self) -> &[ContractDescriptor] {
        &self.contracts
    }

    pub fn get(&self, id: &str) -> Option<&ContractDescriptor> {
        self.contracts.iter().find(|c| c.id == id)
    }
}
