//! Server application state

use std::sync::Arc;

use deployer_core::ArtifactPaths;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    artifacts: Arc<ArtifactPaths>,
}

impl AppState {
    pub fn new(artifacts: ArtifactPaths) -> Self {
        Self {
            artifacts: Arc::new(artifacts),
        }
    }

    /// Where the contract's build artifacts live
    pub fn artifacts(&self) -> &ArtifactPaths {
        &self.artifacts
    }
}
