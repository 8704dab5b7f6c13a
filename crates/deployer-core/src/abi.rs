//! ABI parsing and constructor encoding
//!
//! Provides the [`Abi`] struct, a thin wrapper over alloy's [`JsonAbi`] that
//! knows how to turn user-supplied constructor arguments into calldata.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::json_abi::{JsonAbi, Param};

use crate::error::{Error, Result};

/// Wrapper around alloy's JsonAbi
#[derive(Debug, Clone)]
pub struct Abi(JsonAbi);

impl Abi {
    /// Parse a JSON ABI string into an Abi struct
    pub fn parse(json: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|e| Error::AbiParse(format!("Failed to parse ABI: {}", e)))?;
        Ok(Self(abi))
    }

    /// Parse from a serde_json::Value
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_value(value.clone())
            .map_err(|e| Error::AbiParse(format!("Failed to parse ABI: {}", e)))?;
        Ok(Self(abi))
    }

    /// Constructor inputs, empty when the ABI declares no constructor
    pub fn constructor_inputs(&self) -> &[Param] {
        self.0
            .constructor
            .as_ref()
            .map(|c| c.inputs.as_slice())
            .unwrap_or_default()
    }

    /// ABI-encode constructor arguments given as strings.
    ///
    /// `string` inputs take the argument verbatim. Every other input is coerced
    /// to its Solidity type, so `"42"` becomes a `uint256`.
    pub fn encode_constructor_args(&self, args: &[&str]) -> Result<Vec<u8>> {
        let inputs = self.constructor_inputs();
        if inputs.len() != args.len() {
            return Err(Error::AbiEncode(format!(
                "Expected {} constructor arguments, got {}",
                inputs.len(),
                args.len()
            )));
        }

        if args.is_empty() {
            return Ok(Vec::new());
        }

        let mut values = Vec::with_capacity(args.len());
        for (i, (input, arg)) in inputs.iter().zip(args).enumerate() {
            values.push(coerce_arg(input, arg).map_err(|e| {
                Error::AbiEncode(format!("Argument {} ({}): {}", i, input.name, e))
            })?);
        }

        Ok(DynSolValue::Tuple(values).abi_encode_params())
    }
}

fn coerce_arg(input: &Param, arg: &str) -> std::result::Result<DynSolValue, String> {
    let type_str = input.selector_type();
    let sol_type: DynSolType = type_str
        .parse()
        .map_err(|e| format!("Unknown type '{}': {}", type_str, e))?;

    match sol_type {
        DynSolType::String => Ok(DynSolValue::String(arg.to_string())),
        _ => sol_type
            .coerce_str(arg)
            .map_err(|e| format!("Invalid {} value '{}': {}", type_str, arg, e)),
    }
}
