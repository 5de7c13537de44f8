use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shelf_core::error::{AppError, error_body};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("book not found")]
    BookNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("could not find book in Open Library")]
    ImportNotFound,
    #[error("Open Library record not found")]
    RemoteRecordNotFound,
    #[error("title is required")]
    MissingTitle,
    #[error("Open Library key must start with '/'")]
    InvalidRemoteKey,
    #[error("comment content is required")]
    EmptyComment,
    #[error("invalid {0}")]
    InvalidField(&'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("account already exists")]
    AccountAlreadyExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::ImportNotFound => "IMPORT_NOT_FOUND",
            Self::RemoteRecordNotFound => "REMOTE_RECORD_NOT_FOUND",
            Self::MissingTitle => "MISSING_TITLE",
            Self::InvalidRemoteKey => "INVALID_REMOTE_KEY",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BookNotFound
            | Self::AuthorNotFound
            | Self::FavoriteNotFound
            | Self::ImportNotFound
            | Self::RemoteRecordNotFound => StatusCode::NOT_FOUND,
            Self::MissingTitle
            | Self::InvalidRemoteKey
            | Self::EmptyComment
            | Self::InvalidField(_)
            | Self::PasswordMismatch => StatusCode::BAD_REQUEST,
            Self::AccountAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for CatalogServiceError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Unauthorized => Self::Unauthorized,
            AppError::Forbidden => Self::Forbidden,
            AppError::Internal(e) => Self::Internal(e),
            other => Self::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_body(self.status(), self.kind(), self.to_string())
    }
}
