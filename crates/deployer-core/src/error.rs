use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading contract artifacts from disk
#[derive(Error, Debug)]
pub enum Error {
    #[error("Artifact not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ABI parse error: {0}")]
    AbiParse(String),

    #[error("ABI encode error: {0}")]
    AbiEncode(String),

    #[error("Invalid bytecode: {0}")]
    Bytecode(String),
}

impl Error {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::ArtifactNotFound(_) => "ARTIFACT_NOT_FOUND",
            Error::Io(_) => "IO_ERROR",
            Error::AbiParse(_) => "ABI_PARSE_ERROR",
            Error::AbiEncode(_) => "ABI_ENCODE_ERROR",
            Error::Bytecode(_) => "BYTECODE_ERROR",
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Bytecode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running a deployment attempt.
///
/// The variant tells logs what went wrong; users only ever see one generic
/// failure notice.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("No wallet provider detected")]
    Environment,

    #[error("Wallet request rejected: {0}")]
    UserRejection(String),

    #[error("Failed to load contract details: {0}")]
    NetworkOrArtifact(String),

    #[error("Deployment transaction failed: {0}")]
    Chain(String),
}

impl DeployError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            DeployError::Environment => "WALLET_MISSING",
            DeployError::UserRejection(_) => "USER_REJECTED",
            DeployError::NetworkOrArtifact(_) => "ARTIFACT_UNAVAILABLE",
            DeployError::Chain(_) => "TRANSACTION_FAILED",
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        DeployError::UserRejection(message.into())
    }

    pub fn artifact(message: impl Into<String>) -> Self {
        DeployError::NetworkOrArtifact(message.into())
    }

    pub fn chain(message: impl Into<String>) -> Self {
        DeployError::Chain(message.into())
    }
}

impl From<Error> for DeployError {
    fn from(err: Error) -> Self {
        DeployError::NetworkOrArtifact(err.to_string())
    }
}
