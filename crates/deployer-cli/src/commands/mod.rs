//! CLI commands for deployer

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod deploy;
pub mod serve;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Serve the contract's ABI and bytecode over HTTP
    Serve(serve::ServeCommand),

    /// Deploy the contract through a wallet node
    Deploy(deploy::DeployCommand),
}

impl Command {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Command::Serve(cmd) => cmd.run().await,
            Command::Deploy(cmd) => cmd.run().await,
        }
    }
}
