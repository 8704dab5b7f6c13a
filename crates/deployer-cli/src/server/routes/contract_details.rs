use axum::{extract::State, routing::get, Json, Router};
use deployer_core::ContractArtifact;

use crate::server::error::ApiError;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contract-details", get(get_details))
}

/// The contract's ABI and bytecode, read from disk on every request
async fn get_details(State(state): State<AppState>) -> Result<Json<ContractArtifact>, ApiError> {
    let artifact = state.artifacts().load()?;
    Ok(Json(artifact))
}
