use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use uuid::Uuid;

use shelf_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::CatalogServiceError;

pub const USERNAME_MAX_LEN: usize = 150;
pub const FIRST_NAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Letters, digits and `@ . + - _`.
fn validate_username(username: &str) -> Result<(), CatalogServiceError> {
    let valid = !username.is_empty()
        && username.chars().count() <= USERNAME_MAX_LEN
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(CatalogServiceError::InvalidField("username"))
    }
}

fn validate_first_name(first_name: &str) -> Result<(), CatalogServiceError> {
    if first_name.is_empty() || first_name.chars().count() > FIRST_NAME_MAX_LEN {
        return Err(CatalogServiceError::InvalidField("first_name"));
    }
    Ok(())
}

/// `local@domain.tld`, no whitespace.
fn validate_email(email: &str) -> Result<(), CatalogServiceError> {
    let invalid = || CatalogServiceError::InvalidField("email");
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_password(password1: &str, password2: &str) -> Result<(), CatalogServiceError> {
    if password1 != password2 {
        return Err(CatalogServiceError::PasswordMismatch);
    }
    if password1.chars().count() < PASSWORD_MIN_LEN
        || password1.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CatalogServiceError::InvalidField("password"));
    }
    Ok(())
}

/// Hash with argon2 defaults and a random salt; returns the PHC string.
pub fn hash_password(password: &str) -> Result<String, CatalogServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// A malformed stored hash verifies as `false`.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: String,
    pub first_name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

pub struct RegisterUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Account, CatalogServiceError> {
        let username = input.username.trim();
        let first_name = input.first_name.trim();
        let email = input.email.trim();

        validate_username(username)?;
        validate_first_name(first_name)?;
        validate_email(email)?;
        validate_password(&input.password1, &input.password2)?;

        if self.repo.find_by_username(username).await?.is_some() {
            return Err(CatalogServiceError::AccountAlreadyExists);
        }

        let account = Account {
            id: AccountId(Uuid::now_v7()),
            username: username.to_owned(),
            first_name: first_name.to_owned(),
            email: email.to_owned(),
            password_hash: hash_password(&input.password1)?,
            created_at: Utc::now(),
        };
        self.repo.create(&account).await?;
        tracing::info!(account_id = %account.id, "account registered");
        Ok(account)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct LoginUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> LoginUseCase<R> {
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> Result<Account, CatalogServiceError> {
        let account = self
            .repo
            .find_by_username(input.username.trim())
            .await?
            .ok_or(CatalogServiceError::InvalidCredentials)?;
        if !verify_password(&input.password, &account.password_hash) {
            return Err(CatalogServiceError::InvalidCredentials);
        }
        Ok(account)
    }
}
