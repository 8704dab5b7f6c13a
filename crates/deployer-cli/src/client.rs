//! Fetches contract details from a running `deployer serve`

use async_trait::async_trait;
use color_eyre::eyre::Result;
use deployer_core::{ArtifactSource, ContractArtifact, DeployError};
use reqwest::Url;

const CONTRACT_DETAILS_PATH: &str = "api/contract-details";

pub struct HttpArtifactSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpArtifactSource {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base: Url = base_url.parse()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            url: base.join(CONTRACT_DETAILS_PATH)?,
        })
    }
}

#[async_trait]
impl ArtifactSource for HttpArtifactSource {
    async fn fetch(&self) -> Result<ContractArtifact, DeployError> {
        tracing::debug!(url = %self.url, "fetching contract details");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| DeployError::artifact(format!("Request to {} failed: {}", self.url, e)))?;

        response
            .json::<ContractArtifact>()
            .await
            .map_err(|e| DeployError::artifact(format!("Invalid contract details: {}", e)))
    }
}
