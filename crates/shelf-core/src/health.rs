use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check backing `GET /readyz`: the service is ready once its
/// database answers a ping. Services wrap this in a handler over their own state.
pub async fn check_database(db: &DatabaseConnection) -> Result<StatusCode, AppError> {
    match db.ping().await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::warn!(error = %e, "readiness: database ping failed");
            Err(AppError::Unavailable)
        }
    }
}
