use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use deployer_core::ArtifactPaths;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "deployer.toml";

/// Deployer configuration file structure (deployer.toml)
///
/// Every section is optional, a missing file means defaults everywhere.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployerConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_artifact_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_contract")]
    pub contract: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifact_dir(),
            contract: default_contract(),
        }
    }
}

impl ArtifactsConfig {
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.dir, &self.contract)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The wallet node. Without an RPC URL there is no wallet provider.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// How often to poll for the deployment receipt
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WalletConfig {
    /// The configured RPC URL with `${VAR}` references resolved
    pub fn resolved_rpc_url(&self) -> Result<Option<String>> {
        self.rpc_url.as_deref().map(resolve_env_var).transpose()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from(ArtifactPaths::DEFAULT_DIR)
}

fn default_contract() -> String {
    ArtifactPaths::DEFAULT_CONTRACT.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl DeployerConfig {
    /// Load `path`, or `deployer.toml` in the current directory.
    ///
    /// An explicitly given file must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load_from(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Could not read {}: {}", path.display(), e))?;

        let config: DeployerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Resolve environment variable references in a string
/// Supports ${VAR_NAME} syntax
fn resolve_env_var(value: &str) -> Result<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).map_err(|_| eyre!("Environment variable '{}' not set", var_name))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[artifacts]
dir = "out"
contract = "Greeter"

[server]
host = "0.0.0.0"
port = 8080

[wallet]
rpc_url = "http://localhost:8545"
poll_interval_ms = 250
"#;

        let config: DeployerConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(
            config.artifacts.paths().abi_path(),
            PathBuf::from("out/Greeter.abi")
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.wallet.resolved_rpc_url().unwrap().as_deref(),
            Some("http://localhost:8545")
        );
        assert_eq!(config.wallet.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: DeployerConfig = toml::from_str("").unwrap();

        assert_eq!(
            config.artifacts.paths().bytecode_path(),
            PathBuf::from("build/MyContract.bin")
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.wallet.rpc_url.is_none());
        assert_eq!(config.wallet.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_partial_section() {
        let toml_content = r#"
[artifacts]
contract = "Greeter"
"#;

        let config: DeployerConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.artifacts.dir, PathBuf::from("build"));
        assert_eq!(config.artifacts.contract, "Greeter");
    }

    #[test]
    fn test_wallet_rpc_from_env() {
        std::env::set_var("DEPLOYER_TEST_WALLET_RPC", "http://wallet.test:8545");

        let config: DeployerConfig = toml::from_str(
            r#"
[wallet]
rpc_url = "${DEPLOYER_TEST_WALLET_RPC}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.wallet.resolved_rpc_url().unwrap().as_deref(),
            Some("http://wallet.test:8545")
        );

        std::env::remove_var("DEPLOYER_TEST_WALLET_RPC");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DeployerConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployer.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let config = DeployerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_resolve_env_var_literal() {
        let result = resolve_env_var("https://literal.url").unwrap();
        assert_eq!(result, "https://literal.url");
    }

    #[test]
    fn test_resolve_env_var_missing() {
        let result = resolve_env_var("${NONEXISTENT_VAR_99999}");
        assert!(result.is_err());
    }
}
