//! Contract artifacts produced by the compiler
//!
//! The [`ArtifactPaths`] struct locates the `<contract>.abi` and
//! `<contract>.bin` files in the build directory and loads them into a
//! [`ContractArtifact`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{DeployError, Error, Result};

/// The interface description and bytecode of a compiled contract.
///
/// Serializes as `{ "abi": ..., "bytecode": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractArtifact {
    pub abi: serde_json::Value,
    pub bytecode: String,
}

/// Locates the build artifacts of a single contract.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    dir: PathBuf,
    contract: String,
}

impl ArtifactPaths {
    /// The build directory used when none is configured
    pub const DEFAULT_DIR: &str = "build";

    /// The contract name used when none is configured
    pub const DEFAULT_CONTRACT: &str = "MyContract";

    /// Create paths for `contract` inside `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P, contract: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            contract: contract.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    /// Path to the JSON interface description
    pub fn abi_path(&self) -> PathBuf {
        self.dir.join(format!("{}.abi", self.contract))
    }

    /// Path to the hex bytecode
    pub fn bytecode_path(&self) -> PathBuf {
        self.dir.join(format!("{}.bin", self.contract))
    }

    /// Read both files from disk.
    ///
    /// The ABI must be valid JSON. The bytecode is returned exactly as stored.
    pub fn load(&self) -> Result<ContractArtifact> {
        let abi_path = self.abi_path();
        let abi = read_text(&abi_path)?;
        let bytecode = read_text(&self.bytecode_path())?;

        let abi = serde_json::from_str(&abi).map_err(|e| {
            Error::AbiParse(format!("{} is not valid JSON: {}", abi_path.display(), e))
        })?;

        Ok(ContractArtifact { abi, bytecode })
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR, Self::DEFAULT_CONTRACT)
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ArtifactNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Where a deployment gets its contract artifact from
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn fetch(&self) -> std::result::Result<ContractArtifact, DeployError>;
}

#[async_trait]
impl ArtifactSource for ArtifactPaths {
    async fn fetch(&self) -> std::result::Result<ContractArtifact, DeployError> {
        Ok(self.load()?)
    }
}
