use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use shelf_domain::id::AccountId;

use crate::domain::types::Account;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::account::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

/// Public account profile; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub username: String,
    pub first_name: String,
    pub email: String,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            first_name: account.first_name,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ── POST /accounts/register ──────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), CatalogServiceError> {
    let uc = RegisterUseCase {
        repo: state.account_repo(),
    };
    let account = uc
        .execute(RegisterInput {
            username: body.username,
            first_name: body.first_name,
            email: body.email,
            password1: body.password1,
            password2: body.password2,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── POST /accounts/login ─────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, CatalogServiceError> {
    let uc = LoginUseCase {
        repo: state.account_repo(),
    };
    let account = uc
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok(Json(account.into()))
}
