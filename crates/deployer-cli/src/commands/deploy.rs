//! Deploy the contract from the terminal
//!
//! Runs the same workflow as the web form: connect the wallet, fetch the
//! contract details from the server, deploy with the initial message and wait
//! for the contract address.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use deployer_core::{DeploymentSession, Submission, Wallet};
use dialoguer::Input;

use crate::client::HttpArtifactSource;
use crate::config::DeployerConfig;
use crate::frontend::TerminalFrontend;
use crate::wallet::RpcWallet;

/// Deploy the contract through a wallet node
#[derive(Args)]
pub struct DeployCommand {
    /// Initial message passed to the constructor (prompted when omitted)
    #[arg(long, short)]
    pub message: Option<String>,

    /// Base URL of a running `deployer serve`
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub api_url: String,

    /// JSON-RPC URL of the wallet node
    #[arg(long, env = "DEPLOYER_WALLET_RPC")]
    pub wallet_rpc: Option<String>,

    /// Path to deployer.toml
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl DeployCommand {
    pub async fn run(self) -> Result<()> {
        let config = DeployerConfig::load(self.config.as_deref())?;

        let wallet_rpc = match self.wallet_rpc {
            Some(url) => Some(url),
            None => config.wallet.resolved_rpc_url()?,
        };
        let wallet = wallet_rpc
            .map(|url| -> Result<Arc<dyn Wallet>> {
                let wallet: Arc<dyn Wallet> =
                    Arc::new(RpcWallet::connect(&url, config.wallet.poll_interval())?);
                Ok(wallet)
            })
            .transpose()?;

        let artifacts = Arc::new(HttpArtifactSource::new(&self.api_url)?);
        let frontend = Arc::new(TerminalFrontend);
        let mut session = DeploymentSession::new(wallet, artifacts, frontend.clone());

        let message = match self.message {
            Some(message) => message,
            None => prompt_message()?,
        };
        session.set_message(message);
        frontend.print_form(session.state());

        match session.submit().await {
            Submission::Deployed(_) => Ok(()),
            Submission::Failed(err) => Err(eyre!(err)),
            Submission::WalletMissing => Err(eyre!(
                "No wallet provider. Pass --wallet-rpc, set DEPLOYER_WALLET_RPC or configure [wallet] in deployer.toml"
            )),
            Submission::EmptyMessage => Err(eyre!("The initial message is required")),
            Submission::Busy => Err(eyre!("A deployment is already in progress")),
        }
    }
}

fn prompt_message() -> Result<String> {
    let message: String = Input::new()
        .with_prompt("Initial Message")
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.is_empty() {
                Err("The initial message is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(message)
}
