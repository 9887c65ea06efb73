use dotenv::dotenv;
use evm_deploy_example::bundled_registry;
use evm_deploy_rs::{
    ChainInfo, DeployPhase, DeploySession, Env, EnvConfigs, EthereumWallet, KeyWallet,
    PrivateKeySigner, WalletSession, KEY_WALLET_CONNECTOR_ID,
};
use std::{env, error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    // Loads the private key from the .env file
    let private_key = env::var("PRIVATE_KEY").expect("PRIVATE_KEY must be set in .env file");
    let signer: PrivateKeySigner = private_key.parse().expect("Invalid private key");

    // The single supported target network
    let chain = ChainInfo::sepolia();

    // Creates a new environment
    let configs = EnvConfigs {
        rpc_url: env::var("RPC_URL")
            .unwrap_or_else(|_| "https://ethereum-sepolia-rpc.publicnode.com".to_string()),
        chain: chain.clone(),
    };
    let environment = Env::new(configs, EthereumWallet::from(signer.clone()))?;

    // Opens a local-key wallet session on the target chain
    let wallet = Arc::new(KeyWallet::new(signer, chain.id, &chain.name));
    wallet.connect(KEY_WALLET_CONNECTOR_ID).await?;

    // Builds the deployment session from the bundled contract registry
    let mut session = DeploySession::new(bundled_registry()?);
    session.set_env(environment);
    session.set_wallet(wallet);
    println!("{}", session.connection_status());

    // Picks the greeter contract and fills its constructor parameter
    session.select_contract("greeter")?;
    session.set_argument("greeting", "hello from evm-deploy-rs")?;

    // Deploys and waits for one confirmation
    session.deploy().await;

    match session.phase() {
        DeployPhase::Succeeded(result) => {
            println!("Contract deployed at {}", result.contract_address);
            println!("Transaction: {}", result.transaction_hash);
            println!("Explorer: {}", result.explorer_url);
        }
        DeployPhase::Failed(message) => eprintln!("Deployment failed: {}", message),
        _ => {}
    }

    Ok(())
}
