//! The deployment workflow
//!
//! A [`DeploymentSession`] owns the form state and walks one submission
//! through wallet connection, artifact fetch, deployment and confirmation.
//! Every transition is pushed to a [`Frontend`], which also receives the
//! user-visible notices.
//!
//! Errors from any step are caught once in [`DeploymentSession::submit`],
//! logged with their kind and reported to the user as a single generic notice.
//! The `deploying` flag is released after every attempt, whatever the outcome.

use std::sync::Arc;

use alloy::primitives::Address;

use crate::artifact::ArtifactSource;
use crate::error::DeployError;
use crate::factory::ContractFactory;
use crate::state::FormState;
use crate::wallet::{Signer, Wallet};

/// Shown when no wallet is available
pub const WALLET_MISSING_NOTICE: &str = "Please install a wallet provider!";

/// Shown for every failed attempt
pub const FAILURE_NOTICE: &str = "Failed to deploy contract";

/// Displays the deployment form
pub trait Frontend: Send + Sync {
    /// Called after every state transition
    fn render(&self, state: &FormState);

    /// Show a notice to the user
    fn alert(&self, message: &str);
}

/// How a submission ended
#[derive(Debug)]
pub enum Submission {
    /// The contract was created at this address
    Deployed(Address),
    /// The attempt started and failed
    Failed(DeployError),
    /// No wallet provider, nothing was attempted
    WalletMissing,
    /// The message is empty, nothing was attempted
    EmptyMessage,
    /// Another attempt is still deploying
    Busy,
}

impl Submission {
    pub fn address(&self) -> Option<Address> {
        match self {
            Submission::Deployed(address) => Some(*address),
            _ => None,
        }
    }
}

pub struct DeploymentSession {
    state: FormState,
    wallet: Option<Arc<dyn Wallet>>,
    artifacts: Arc<dyn ArtifactSource>,
    frontend: Arc<dyn Frontend>,
}

impl DeploymentSession {
    /// `wallet` is `None` when no wallet provider is present
    pub fn new(
        wallet: Option<Arc<dyn Wallet>>,
        artifacts: Arc<dyn ArtifactSource>,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            state: FormState::default(),
            wallet,
            artifacts,
            frontend,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Edit the message input
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.transition(|state| state.with_message(message));
    }

    /// Submit the form and run one deployment attempt to completion.
    pub async fn submit(&mut self) -> Submission {
        if !self.state.can_submit() {
            return Submission::Busy;
        }

        if !self.state.is_message_valid() {
            return Submission::EmptyMessage;
        }

        let Some(wallet) = self.wallet.clone() else {
            tracing::warn!(code = DeployError::Environment.code(), "no wallet provider");
            self.frontend.alert(WALLET_MISSING_NOTICE);
            return Submission::WalletMissing;
        };

        let submission = match self.attempt(wallet).await {
            Ok(address) => {
                tracing::info!(%address, "contract deployed");
                self.transition(|state| state.confirmed(address));
                self.frontend
                    .alert(&format!("Contract deployed at address: {}", address));
                Submission::Deployed(address)
            }
            Err(err) => {
                tracing::error!(code = err.code(), error = %err, "failed to deploy contract");
                self.transition(FormState::failed);
                self.frontend.alert(FAILURE_NOTICE);
                Submission::Failed(err)
            }
        };

        self.transition(FormState::settled);
        submission
    }

    async fn attempt(&mut self, wallet: Arc<dyn Wallet>) -> Result<Address, DeployError> {
        self.transition(FormState::connecting);
        let signer = Signer::connect(wallet).await?;
        tracing::debug!(account = %signer.address(), "wallet connected");

        self.transition(FormState::fetching_artifact);
        let artifact = self.artifacts.fetch().await?;
        let factory = ContractFactory::new(&artifact, signer)?;

        self.transition(FormState::deploying);
        let message = self.state.message.clone();
        let pending = factory.deploy(&[message.as_str()]).await?;
        tracing::debug!(tx_hash = %pending.tx_hash(), "waiting for confirmation");
        pending.deployed().await
    }

    fn transition(&mut self, f: impl FnOnce(FormState) -> FormState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
        self.frontend.render(&self.state);
    }
}
