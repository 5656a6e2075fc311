//! Health check endpoint

use axum::Json;
use axum::extract::State;
use shared::error::AppResult;

use crate::state::AppState;

/// GET /health and GET /: liveness plus the database server version
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let database = state.store.server_version().await?;
    Ok(Json(serde_json::json!({
        "status": "ok",
        "service": "stock-server",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    })))
}
