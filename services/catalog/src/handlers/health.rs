use axum::{extract::State, http::StatusCode};

use shelf_core::error::AppError;
use shelf_core::health::check_database;

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    check_database(&state.db).await
}
