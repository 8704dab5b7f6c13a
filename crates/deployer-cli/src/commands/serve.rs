//! Start the contract details server

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;

use crate::config::DeployerConfig;
use crate::server::ServerConfig;

/// Serve the contract's ABI and bytecode over HTTP
#[derive(Args)]
pub struct ServeCommand {
    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Path to deployer.toml
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl ServeCommand {
    pub async fn run(self) -> Result<()> {
        let config = DeployerConfig::load(self.config.as_deref())?;
        let artifacts = config.artifacts.paths();

        if !artifacts.dir().is_dir() {
            tracing::warn!(
                dir = %artifacts.dir().display(),
                "build directory does not exist, contract details will fail until it is created"
            );
        }

        let server = ServerConfig {
            host: self.host.unwrap_or(config.server.host),
            port: self.port.unwrap_or(config.server.port),
        };

        println!("{} Starting deployer server...", style("→").blue());
        println!();
        println!(
            "  {} Contract: {} ({}, {})",
            style("◆").cyan(),
            style(artifacts.contract()).cyan(),
            artifacts.abi_path().display(),
            artifacts.bytecode_path().display()
        );
        println!(
            "  {} API:      {}",
            style("◆").cyan(),
            style(format!(
                "http://{}:{}/api/contract-details",
                server.host, server.port
            ))
            .underlined()
            .cyan()
        );
        println!();
        println!("  Press {} to stop the server", style("Ctrl+C").yellow());
        println!();

        crate::server::run_server(artifacts, server)
            .await
            .map_err(|e| eyre!("Server error: {}", e))?;

        Ok(())
    }
}
