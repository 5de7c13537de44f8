use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shelf_domain::id::AuthorId;
use shelf_domain::pagination::Page;

use crate::domain::types::{Author, AuthorWithCount};
use crate::error::CatalogServiceError;
use crate::handlers::book::{BookResponse, PageQuery};
use crate::state::AppState;
use crate::usecase::author::{GetAuthorBooksUseCase, ListAuthorsUseCase};

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: AuthorId,
    pub name: String,
    pub birth_date: Option<String>,
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_count: Option<u64>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            birth_date: author.birth_date,
            bio: author.bio,
            book_count: None,
        }
    }
}

impl From<AuthorWithCount> for AuthorResponse {
    fn from(entry: AuthorWithCount) -> Self {
        Self {
            book_count: Some(entry.book_count),
            ..Self::from(entry.author)
        }
    }
}

#[derive(Serialize)]
pub struct AuthorListResponse {
    pub search: String,
    pub authors: Page<AuthorResponse>,
}

#[derive(Serialize)]
pub struct AuthorDetailResponse {
    pub author: AuthorResponse,
    pub books: Page<BookResponse>,
}

#[derive(Deserialize, Default)]
pub struct AuthorListQuery {
    pub search: Option<String>,
    pub page: Option<String>,
}

// ── GET /authors ─────────────────────────────────────────────────────────────

pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorListQuery>,
) -> Result<Json<AuthorListResponse>, CatalogServiceError> {
    let uc = ListAuthorsUseCase {
        repo: state.author_repo(),
    };
    let authors = uc
        .execute(query.search.as_deref(), query.page.as_deref())
        .await?;
    Ok(Json(AuthorListResponse {
        search: query.search.unwrap_or_default().trim().to_owned(),
        authors: authors.map(AuthorResponse::from),
    }))
}

// ── GET /authors/{author_id} ─────────────────────────────────────────────────

pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<AuthorId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<AuthorDetailResponse>, CatalogServiceError> {
    let uc = GetAuthorBooksUseCase {
        authors: state.author_repo(),
        books: state.book_repo(),
    };
    let result = uc.execute(author_id, query.page.as_deref()).await?;
    Ok(Json(AuthorDetailResponse {
        author: result.author.into(),
        books: result.books.map(BookResponse::from),
    }))
}
