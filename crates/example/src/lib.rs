use evm_deploy_rs::{ContractRegistry, DeployHelperError};

/// Registry of the example contracts shipped with this crate.
pub const REGISTRY_JSON: &str = include_str!("../contracts.json");

pub fn bundled_registry() -> Result<ContractRegistry, DeployHelperError> {
    ContractRegistry::from_json(REGISTRY_JSON)
}
