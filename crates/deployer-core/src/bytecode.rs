//! Bytecode handling utilities
//!
//! Compiler output arrives as a hex string, sometimes `0x`-prefixed and
//! usually ending in a newline. [`Bytecode`] turns it into the raw bytes that
//! become the body of a deployment transaction.

use crate::error::{Error, Result};
use alloy::primitives::keccak256;

/// Represents compiled contract bytecode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bytecode {
    bytes: Vec<u8>,
}

impl Bytecode {
    /// Create bytecode from a hex string (with or without 0x prefix).
    ///
    /// Surrounding whitespace is ignored. Empty bytecode is rejected since an
    /// interface or abstract contract cannot be deployed.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let clean = hex.trim();
        let clean = clean.strip_prefix("0x").unwrap_or(clean);
        if clean.is_empty() {
            return Err(Error::Bytecode("bytecode is empty".to_string()));
        }
        let bytes = hex::decode(clean)?;
        Ok(Self { bytes })
    }

    /// Compute the keccak256 hash of the bytecode
    pub fn hash(&self) -> String {
        format!("{:x}", keccak256(&self.bytes))
    }

    /// Size of the creation code in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Bytecode followed by ABI-encoded constructor arguments
    pub fn with_constructor_args(&self, encoded_args: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.bytes.len() + encoded_args.len());
        data.extend_from_slice(&self.bytes);
        data.extend_from_slice(encoded_args);
        data
    }
}
