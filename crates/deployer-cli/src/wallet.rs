//! Wallet backed by a JSON-RPC node that manages its own accounts
//!
//! The node (a dev chain, a signer proxy, a browser wallet bridge) holds the
//! keys: this process only asks for accounts and has the node sign with
//! `eth_sendTransaction`.

use std::time::Duration;

use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use color_eyre::eyre::Result;
use deployer_core::{DeployError, Wallet};

pub struct RpcWallet {
    provider: DynProvider,
}

impl RpcWallet {
    /// `poll_interval` is how often the node is asked for the deployment receipt
    pub fn connect(rpc_url: &str, poll_interval: Duration) -> Result<Self> {
        let url: Url = rpc_url.parse()?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        provider.client().set_poll_interval(poll_interval);
        Ok(Self { provider })
    }
}

#[async_trait]
impl Wallet for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, DeployError> {
        self.provider
            .get_accounts()
            .await
            .map_err(|e| DeployError::rejected(format!("Failed to get accounts: {}", e)))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DeployError> {
        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            DeployError::chain(format!("Failed to send deployment transaction: {}", e))
        })?;

        Ok(*pending.tx_hash())
    }

    async fn wait_for_contract(&self, tx_hash: TxHash) -> Result<Address, DeployError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| DeployError::chain(format!("Failed to get transaction receipt: {}", e)))?;

        created_contract(tx_hash, &receipt)
    }
}

/// The address a mined deployment created. Reverted receipts and receipts
/// without a contract address are chain failures.
fn created_contract<R: ReceiptResponse>(
    tx_hash: TxHash,
    receipt: &R,
) -> Result<Address, DeployError> {
    if !receipt.status() {
        return Err(DeployError::chain(format!("Transaction {} reverted", tx_hash)));
    }

    receipt
        .contract_address()
        .ok_or_else(|| DeployError::chain(format!("Transaction {} created no contract", tx_hash)))
}
