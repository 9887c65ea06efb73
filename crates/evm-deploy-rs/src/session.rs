//! # Deployment Session
//!
//! One UI session's worth of state: the selected contract, the partially
//! filled constructor arguments, and the deployment phase, together with the
//! orchestration of a single deployment attempt against the injected wallet
//! and RPC collaborators.
use crate::{
    coerce::{coerce, constructor_call_values, validate_constructor_args, ArgValue},
    env::Env,
    error::DeployHelperError,
    registry::{ContractDescriptor, ContractRegistry},
    transaction::DeployTransactionBuilder,
    wallet::WalletSession,
};
use alloy::primitives::{Address, TxHash};
use std::{collections::HashMap, sync::Arc};

/// Displayed when a collaborator error carries no message of its own.
const GENERIC_FAILURE_MESSAGE: &str = "Deployment failed";

/// Flattens a collaborator error's text to the single displayed message.
fn failure_message(raw: &str) -> String {
    if raw.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}

/// Outcome of one successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub transaction_hash: TxHash,
    /// Explorer page for the deployed address.
    pub explorer_url: String,
}

/// Phase of the current deployment attempt.
///
/// `Idle` is both the initial and the re-enterable state; `Failed` is
/// logically idle with an error on display. An error and a result can never
/// coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeployPhase {
    #[default]
    Idle,
    Deploying,
    Succeeded(DeploymentResult),
    Failed(String),
}

impl DeployPhase {
    pub fn is_deploying(&self) -> bool {
        matches!(self, Self::Deploying)
    }

    pub fn result(&self) -> Option<&DeploymentResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Form and orchestration state for one deployment session.
pub struct DeploySession {
    registry: ContractRegistry,
    env: Option<Env>,
    wallet: Option<Arc<dyn WalletSession>>,
    selected: Option<String>,
    args: HashMap<String, ArgValue>,
    phase: DeployPhase,
}

impl DeploySession {
    pub fn new(registry: ContractRegistry) -> Self {
        Self {
            registry,
            env: None,
            wallet: None,
            selected: None,
            args: HashMap::new(),
            phase: DeployPhase::Idle,
        }
    }

    pub fn set_env(&mut self, env: Env) {
        self.env = Some(env);
    }

    pub fn set_wallet(&mut self, wallet: Arc<dyn WalletSession>) {
        self.wallet = Some(wallet);
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    pub fn phase(&self) -> &DeployPhase {
        &self.phase
    }

    pub fn selected_contract(&self) -> Option<&ContractDescriptor> {
        self.selected.as_deref().and_then(|id| self.registry.get(id))
    }

    /// Selects a contract, clearing previously entered argument values and
    /// any previous result or error. Stale entries from another contract
    /// must never leak into a new attempt.
    pub fn select_contract(&mut self, id: &str) -> Result<(), DeployHelperError> {
        if self.registry.get(id).is_none() {
            return Err(DeployHelperError::InvalidArgument(format!(
                "unknown contract: {}",
                id
            )));
        }
        self.selected = Some(id.to_string());
        self.args.clear();
        self.phase = DeployPhase::Idle;
        Ok(())
    }

    /// Coerces and stores one parameter edit. Only parameters of the
    /// currently selected contract's constructor are accepted.
    pub fn set_argument(&mut self, name: &str, raw: &str) -> Result<(), DeployHelperError> {
        let descriptor = self.selected_contract().ok_or_else(|| {
            DeployHelperError::InvalidArgument("no contract selected".to_string())
        })?;
        let input = descriptor
            .constructor_inputs()
            .into_iter()
            .find(|input| input.name == name)
            .ok_or_else(|| {
                DeployHelperError::InvalidArgument(format!(
                    "unknown constructor parameter: {}",
                    name
                ))
            })?;

        let value = coerce(&input.solidity_type, raw)?;
        self.args.insert(input.name, value);
        Ok(())
    }

    pub fn argument(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    /// Runs one deployment attempt. All outcomes land in [`DeploySession::phase`];
    /// missing preconditions (wallet session, RPC client, selection) make the
    /// call a no-op.
    pub async fn deploy(&mut self) {
        let (Some(env), Some(wallet)) = (self.env.clone(), self.wallet.clone()) else {
            return;
        };
        let Some(descriptor) = self.selected_contract().cloned() else {
            return;
        };
        if wallet.address().is_none() {
            return;
        }

        self.phase = DeployPhase::Deploying;

        match self.run_deploy(&env, wallet.as_ref(), &descriptor).await {
            Ok(Some(result)) => {
                tracing::info!(
                    contract = %descriptor.id,
                    address = %result.contract_address,
                    tx = %result.transaction_hash,
                    "contract deployed"
                );
                self.phase = DeployPhase::Succeeded(result);
            }
            // Chain switch requested; the user re-invokes once it settles.
            Ok(None) => self.phase = DeployPhase::Idle,
            Err(err) => {
                tracing::debug!(contract = %descriptor.id, error = %err, "deployment attempt failed");
                self.phase = DeployPhase::Failed(failure_message(&err.to_string()));
            }
        }
    }

    /// `Ok(None)` means a chain switch was requested and nothing was
    /// submitted.
    async fn run_deploy(
        &self,
        env: &Env,
        wallet: &dyn WalletSession,
        descriptor: &ContractDescriptor,
    ) -> Result<Option<DeploymentResult>, DeployHelperError> {
        let target = env.chain().id;
        if wallet.chain_id() != Some(target) {
            wallet.switch_chain(target).await?;
            return Ok(None);
        }

        let inputs = descriptor.constructor_inputs();
        let mut builder =
            DeployTransactionBuilder::new(descriptor.abi.clone(), descriptor.bytecode.clone());
        if !inputs.is_empty() {
            validate_constructor_args(&inputs, &self.args)?;
            let values = constructor_call_values(&inputs, &self.args)?;
            builder = builder.constructor_args(values);
        }

        let tx = builder.build()?;
        let tx_hash = env.send_transaction(tx).await?;
        let receipt = env.wait_for_receipt(tx_hash, 1).await?;
        let contract_address = receipt.deployed_address()?;

        Ok(Some(DeploymentResult {
            contract_address,
            transaction_hash: tx_hash,
            explorer_url: env.chain().address_url(&contract_address),
        }))
    }

    // ---- presentation glue (advisory only) ----

    pub fn connection_status(&self) -> String {
        match self.wallet.as_ref().and_then(|w| w.address()) {
            Some(address) => format!("Connected: {}", address),
            None => "Not connected".to_string(),
        }
    }

    /// True when the wallet reports a chain other than the target.
    pub fn network_mismatch(&self) -> bool {
        match (&self.env, &self.wallet) {
            (Some(env), Some(wallet)) => wallet
                .chain_id()
                .map(|id| id != env.chain().id)
                .unwrap_or(false),
            _ => false,
        }
    }

    pub fn deploy_action_label(&self) -> &'static str {
        if self.phase.is_deploying() {
            "Deploying..."
        } else if self.network_mismatch() {
            "Switch network"
        } else {
            "Deploy"
        }
    }

    /// UI-level guard against concurrent attempts; not a lock.
    pub fn deploy_action_enabled(&self) -> bool {
        !self.phase.is_deploying()
    }
}
