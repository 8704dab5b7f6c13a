//! Liveness and artifact readiness

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(check))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Contract served by `/api/contract-details`
    pub contract: String,
    /// Both the `.abi` and `.bin` files are present on disk
    pub artifacts_ready: bool,
}

/// Always `ok` while the server runs. A missing build is reported through
/// `artifacts_ready` rather than the status code.
async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let artifacts = state.artifacts();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        contract: artifacts.contract().to_string(),
        artifacts_ready: artifacts.abi_path().is_file() && artifacts.bytecode_path().is_file(),
    })
}
