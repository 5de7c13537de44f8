use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shelf_domain::id::{AuthorId, BookId};
use shelf_domain::pagination::Page;

use crate::domain::types::{Author, BookWithAuthors, NO_YEAR};
use crate::error::CatalogServiceError;
use crate::handlers::comment::CommentResponse;
use crate::state::AppState;
use crate::usecase::book::{
    BookSummary, GetBookDetailUseCase, ListBookSummariesUseCase, ListBooksUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AuthorRefResponse {
    pub id: AuthorId,
    pub name: String,
}

impl From<Author> for AuthorRefResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub cover_image: Option<String>,
    pub publication_year: Option<String>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub external_key: Option<String>,
    pub authors: Vec<AuthorRefResponse>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookWithAuthors> for BookResponse {
    fn from(entry: BookWithAuthors) -> Self {
        let book = entry.book;
        Self {
            id: book.id,
            title: book.title,
            cover_image: book.cover_image,
            publication_year: book.publication_year,
            isbn: book.isbn,
            description: book.description,
            external_key: book.external_key,
            authors: entry
                .authors
                .into_iter()
                .map(AuthorRefResponse::from)
                .collect(),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub books: Page<BookResponse>,
    pub total_books: u64,
    pub total_authors: u64,
    pub latest_year: String,
}

#[derive(Serialize)]
pub struct BookDetailResponse {
    pub book: BookResponse,
    pub related_books: Vec<BookResponse>,
    pub comments: Vec<CommentResponse>,
}

#[derive(Serialize)]
pub struct BookSummaryResponse {
    pub title: String,
    pub author_name: String,
    pub publication_year: Option<String>,
}

impl From<BookSummary> for BookSummaryResponse {
    fn from(summary: BookSummary) -> Self {
        Self {
            title: summary.title,
            author_name: summary.author_name,
            publication_year: summary.publication_year,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

/// `page` stays a raw string so garbage falls back to page 1 instead of a 400.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

// ── GET /books ───────────────────────────────────────────────────────────────

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<HomeResponse>, CatalogServiceError> {
    let uc = ListBooksUseCase {
        repo: state.book_repo(),
    };
    let home = uc.execute(query.page.as_deref()).await?;
    Ok(Json(HomeResponse {
        books: home.books.map(BookResponse::from),
        total_books: home.stats.total_books,
        total_authors: home.stats.total_authors,
        latest_year: home
            .stats
            .latest_year
            .unwrap_or_else(|| NO_YEAR.to_owned()),
    }))
}

// ── GET /books/{book_id} ─────────────────────────────────────────────────────

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Json<BookDetailResponse>, CatalogServiceError> {
    let uc = GetBookDetailUseCase {
        books: state.book_repo(),
        comments: state.comment_repo(),
    };
    let detail = uc.execute(book_id).await?;
    Ok(Json(BookDetailResponse {
        book: detail.book.into(),
        related_books: detail.related.into_iter().map(BookResponse::from).collect(),
        comments: detail
            .comments
            .into_iter()
            .map(CommentResponse::from)
            .collect(),
    }))
}

// ── GET /api/books ───────────────────────────────────────────────────────────

pub async fn list_book_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookSummaryResponse>>, CatalogServiceError> {
    let uc = ListBookSummariesUseCase {
        repo: state.book_repo(),
    };
    let summaries = uc.execute().await?;
    Ok(Json(
        summaries
            .into_iter()
            .map(BookSummaryResponse::from)
            .collect(),
    ))
}
