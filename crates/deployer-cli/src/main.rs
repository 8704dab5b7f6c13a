mod client;
mod commands;
mod config;
mod frontend;
mod server;
mod wallet;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

use commands::Command;

#[derive(Parser)]
#[command(name = "deployer")]
#[command(about = "Serve a compiled contract and deploy it through a wallet")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    cli.command.run().await
}
