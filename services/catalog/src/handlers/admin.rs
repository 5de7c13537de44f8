use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shelf_auth_types::identity::IdentityHeaders;

use crate::domain::types::{ImportOutcome, RemoteBook};
use crate::error::CatalogServiceError;
use crate::handlers::book::BookResponse;
use crate::state::AppState;
use crate::usecase::import::ImportBookUseCase;
use crate::usecase::open_library::{RemoteDetailsUseCase, SearchRemoteUseCase};

#[derive(Deserialize)]
pub struct ImportRequest {
    pub title: String,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub created: bool,
    pub book: BookResponse,
}

#[derive(Serialize)]
pub struct RemoteBookResponse {
    pub external_key: Option<String>,
    pub title: String,
    pub author_names: Vec<String>,
    pub publication_year: String,
    pub isbn: String,
    pub cover_image: String,
    pub subjects: Vec<String>,
}

impl From<RemoteBook> for RemoteBookResponse {
    fn from(remote: RemoteBook) -> Self {
        Self {
            external_key: remote.external_key,
            title: remote.title,
            author_names: remote.author_names,
            publication_year: remote.publication_year,
            isbn: remote.isbn,
            cover_image: remote.cover_image,
            subjects: remote.subjects,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct RemoteSearchQuery {
    pub title: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Deserialize, Default)]
pub struct RemoteDetailsQuery {
    pub key: Option<String>,
}

// ── POST /admin/books/import ─────────────────────────────────────────────────

pub async fn import_book(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ImportRequest>,
) -> Result<(StatusCode, Json<ImportResponse>), CatalogServiceError> {
    identity.require_admin()?;

    let uc = ImportBookUseCase {
        open_library: state.open_library(),
        books: state.book_repo(),
    };
    let outcome = uc
        .execute(&body.title)
        .await?
        .ok_or(CatalogServiceError::ImportNotFound)?;

    let (status, created, book) = match outcome {
        ImportOutcome::Created(book) => (StatusCode::CREATED, true, book),
        ImportOutcome::Existing(book) => (StatusCode::OK, false, book),
    };
    Ok((
        status,
        Json(ImportResponse {
            created,
            book: book.into(),
        }),
    ))
}

// ── GET /admin/open-library/search ───────────────────────────────────────────

pub async fn search_open_library(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<RemoteSearchQuery>,
) -> Result<Json<Vec<RemoteBookResponse>>, CatalogServiceError> {
    identity.require_admin()?;

    let uc = SearchRemoteUseCase {
        open_library: state.open_library(),
    };
    let hits = uc
        .execute(query.title.as_deref().unwrap_or_default(), query.limit)
        .await?;
    Ok(Json(hits.into_iter().map(RemoteBookResponse::from).collect()))
}

// ── GET /admin/open-library/details ──────────────────────────────────────────

pub async fn open_library_details(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<RemoteDetailsQuery>,
) -> Result<Json<serde_json::Value>, CatalogServiceError> {
    identity.require_admin()?;

    let uc = RemoteDetailsUseCase {
        open_library: state.open_library(),
    };
    let document = uc.execute(query.key.as_deref().unwrap_or_default()).await?;
    Ok(Json(document))
}
