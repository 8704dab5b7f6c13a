pub mod abi;
pub mod artifact;
pub mod bytecode;
pub mod error;
pub mod factory;
pub mod session;
pub mod state;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use abi::Abi;
pub use artifact::{ArtifactPaths, ArtifactSource, ContractArtifact};
pub use bytecode::Bytecode;
pub use error::{DeployError, Error, Result};
pub use factory::{ContractFactory, PendingContract};
pub use session::{
    DeploymentSession, Frontend, Submission, FAILURE_NOTICE, WALLET_MISSING_NOTICE,
};
pub use state::{FormState, Phase};
pub use wallet::{Signer, Wallet};
