//! Wallet capability
//!
//! A [`Wallet`] is whatever holds the user's accounts and signs on their
//! behalf. The deployment workflow only talks to this trait, so it runs the
//! same against a JSON-RPC node or an in-memory fake.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::error::DeployError;

#[async_trait]
pub trait Wallet: Send + Sync {
    /// Ask the wallet for access to its accounts.
    ///
    /// May wait on the user. An empty list means access was refused.
    async fn request_accounts(&self) -> Result<Vec<Address>, DeployError>;

    /// Sign and broadcast a transaction
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DeployError>;

    /// Wait until a deployment transaction is mined and return the created
    /// contract's address
    async fn wait_for_contract(&self, tx_hash: TxHash) -> Result<Address, DeployError>;
}

/// A wallet bound to one approved account
#[derive(Clone)]
pub struct Signer {
    wallet: Arc<dyn Wallet>,
    address: Address,
}

impl Signer {
    pub fn new(wallet: Arc<dyn Wallet>, address: Address) -> Self {
        Self { wallet, address }
    }

    /// Request account access and bind to the first approved account
    pub async fn connect(wallet: Arc<dyn Wallet>) -> Result<Self, DeployError> {
        let accounts = wallet.request_accounts().await?;
        let address = accounts
            .first()
            .copied()
            .ok_or_else(|| DeployError::rejected("no account was approved"))?;
        Ok(Self::new(wallet, address))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn wallet(&self) -> &dyn Wallet {
        self.wallet.as_ref()
    }

    /// Send a transaction from this account
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DeployError> {
        self.wallet.send_transaction(tx.from(self.address)).await
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
