//! Contract deployment from an artifact

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::rpc::types::TransactionRequest;

use crate::abi::Abi;
use crate::artifact::ContractArtifact;
use crate::bytecode::Bytecode;
use crate::error::DeployError;
use crate::wallet::Signer;

/// Deploys one compiled contract with a given signer
#[derive(Debug)]
pub struct ContractFactory {
    abi: Abi,
    bytecode: Bytecode,
    signer: Signer,
}

impl ContractFactory {
    pub fn new(artifact: &ContractArtifact, signer: Signer) -> Result<Self, DeployError> {
        let abi = Abi::from_value(&artifact.abi)?;
        let bytecode = Bytecode::from_hex(&artifact.bytecode)?;
        Ok(Self {
            abi,
            bytecode,
            signer,
        })
    }

    /// Creation calldata: bytecode followed by the encoded constructor arguments
    pub fn deploy_data(&self, args: &[&str]) -> Result<Bytes, DeployError> {
        let encoded = self.abi.encode_constructor_args(args)?;
        Ok(Bytes::from(self.bytecode.with_constructor_args(&encoded)))
    }

    /// Send the CREATE transaction.
    ///
    /// Returns as soon as the transaction is broadcast; await
    /// [`PendingContract::deployed`] for the address.
    pub async fn deploy(&self, args: &[&str]) -> Result<PendingContract, DeployError> {
        let data = self.deploy_data(args)?;

        // CREATE transaction - no 'to' address
        let tx = TransactionRequest::default().input(data.into());
        let tx_hash = self.signer.send_transaction(tx).await?;

        tracing::info!(
            tx_hash = %tx_hash,
            deployer = %self.signer.address(),
            bytecode_hash = %self.bytecode.hash(),
            bytecode_size = self.bytecode.size(),
            "deployment transaction sent"
        );

        Ok(PendingContract {
            signer: self.signer.clone(),
            tx_hash,
        })
    }
}

/// A deployment transaction that has been sent but not yet confirmed
#[derive(Debug)]
pub struct PendingContract {
    signer: Signer,
    tx_hash: TxHash,
}

impl PendingContract {
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Wait for the contract to be created on chain
    pub async fn deployed(self) -> Result<Address, DeployError> {
        self.signer.wallet().wait_for_contract(self.tx_hash).await
    }
}
