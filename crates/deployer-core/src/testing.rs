//! In-memory stand-ins for the wallet, artifact source and frontend

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{address, b256, Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::artifact::{ArtifactSource, ContractArtifact};
use crate::error::DeployError;
use crate::session::Frontend;
use crate::state::FormState;
use crate::wallet::Wallet;

pub const DEPLOYER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
pub const CONTRACT: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
pub const TX_HASH: TxHash =
    b256!("9b7bb827c2e5e3c1a0a44dc53e573aa0b3af3bd1f9f5ed03071b100bb039eaff");

pub const GREETER_BYTECODE: &str = "0x6080604052348015600f57600080fd5b50";

pub fn greeter_artifact() -> ContractArtifact {
    ContractArtifact {
        abi: serde_json::json!([
            {
                "type": "constructor",
                "inputs": [{"name": "initMessage", "type": "string", "internalType": "string"}],
                "stateMutability": "nonpayable"
            },
            {
                "type": "function",
                "name": "message",
                "inputs": [],
                "outputs": [{"name": "", "type": "string"}],
                "stateMutability": "view"
            }
        ]),
        bytecode: GREETER_BYTECODE.to_string(),
    }
}

/// Recover the constructor message from a greeter deployment transaction
pub fn decode_message(tx: &TransactionRequest) -> String {
    let input = tx.input.input().cloned().unwrap_or_default();
    let code_len = (GREETER_BYTECODE.len() - 2) / 2;
    let decoded = DynSolType::Tuple(vec![DynSolType::String])
        .abi_decode_params(&input[code_len..])
        .unwrap();
    match decoded {
        DynSolValue::Tuple(values) => values[0].as_str().unwrap().to_string(),
        other => panic!("unexpected value {:?}", other),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WalletBehavior {
    #[default]
    Approve,
    Reject,
    NoAccounts,
    SendFails,
    Reverts,
}

/// A wallet with one account that answers from memory
#[derive(Default)]
pub struct FakeWallet {
    behavior: WalletBehavior,
    account_requests: AtomicUsize,
    sent: Mutex<Vec<TransactionRequest>>,
}

impl FakeWallet {
    pub fn new(behavior: WalletBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn account_requests(&self) -> usize {
        self.account_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Wallet for FakeWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, DeployError> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            WalletBehavior::Reject => Err(DeployError::rejected("User rejected the request")),
            WalletBehavior::NoAccounts => Ok(Vec::new()),
            _ => Ok(vec![DEPLOYER]),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DeployError> {
        if self.behavior == WalletBehavior::SendFails {
            return Err(DeployError::chain("insufficient funds for gas"));
        }
        self.sent.lock().unwrap().push(tx);
        Ok(TX_HASH)
    }

    async fn wait_for_contract(&self, tx_hash: TxHash) -> Result<Address, DeployError> {
        assert_eq!(tx_hash, TX_HASH);
        match self.behavior {
            WalletBehavior::Reverts => Err(DeployError::chain("transaction reverted")),
            _ => Ok(CONTRACT),
        }
    }
}

/// Serves a fixed artifact and counts requests
pub struct FakeArtifacts {
    artifact: Option<ContractArtifact>,
    fetches: AtomicUsize,
}

impl FakeArtifacts {
    pub fn new(artifact: ContractArtifact) -> Self {
        Self {
            artifact: Some(artifact),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            artifact: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtifactSource for FakeArtifacts {
    async fn fetch(&self) -> Result<ContractArtifact, DeployError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.artifact
            .clone()
            .ok_or_else(|| DeployError::artifact("500 Internal Server Error"))
    }
}

/// Remembers every rendered state and alert
#[derive(Default)]
pub struct RecordingFrontend {
    states: Mutex<Vec<FormState>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingFrontend {
    pub fn states(&self) -> Vec<FormState> {
        self.states.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Frontend for RecordingFrontend {
    fn render(&self, state: &FormState) {
        self.states.lock().unwrap().push(state.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
