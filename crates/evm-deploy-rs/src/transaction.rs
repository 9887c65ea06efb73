use crate::error::DeployHelperError;
use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    network::TransactionBuilder,
    primitives::Bytes,
    rpc::types::TransactionRequest,
};

/// Builds the create transaction for one contract deployment: the creation
/// bytecode, optionally followed by the ABI-encoded constructor arguments.
#[derive(Clone)]
pub struct DeployTransactionBuilder {
    abi: JsonAbi,
    bytecode: Bytes,
    args: Vec<DynSolValue>,
}

impl DeployTransactionBuilder {
    pub fn new(abi: JsonAbi, bytecode: Bytes) -> Self {
        Self {
            abi,
            bytecode,
            args: Vec::new(),
        }
    }

    pub fn constructor_args(mut self, args: Vec<DynSolValue>) -> Self {
        self.args = args;
        self
    }

    /// Concatenates the bytecode with the encoded constructor call.
    ///
    /// Arguments without a constructor entry in the ABI are an error; a
    /// constructor with no supplied arguments still encodes (to nothing for
    /// a parameterless constructor).
    pub fn init_code(&self) -> Result<Bytes, DeployHelperError> {
        match (self.abi.constructor(), self.args.is_empty()) {
            (None, false) => Err(DeployHelperError::AbiEncodingFailed(
                "constructor is not defined in the ABI".to_string(),
            )),
            (None, true) => Ok(self.bytecode.clone()),
            (Some(constructor), _) => {
                let encoded = constructor.abi_encode_input(&self.args)?;
                Ok(self.bytecode.iter().copied().chain(encoded).collect())
            }
        }
    }

    /// Produces the create transaction request; `to` is left as create.
    pub fn build(&self) -> Result<TransactionRequest, DeployHelperError> {
        let code = self.init_code()?;
        Ok(TransactionRequest::default().with_deploy_code(code))
    }
}
