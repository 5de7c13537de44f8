use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogServiceError;
use crate::handlers::author::AuthorResponse;
use crate::handlers::book::BookResponse;
use crate::state::AppState;
use crate::usecase::search::SearchUseCase;

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub books: Vec<BookResponse>,
    pub authors: Vec<AuthorResponse>,
}

// ── GET /search ──────────────────────────────────────────────────────────────

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, CatalogServiceError> {
    let q = query.q.unwrap_or_default().trim().to_owned();
    let uc = SearchUseCase {
        books: state.book_repo(),
        authors: state.author_repo(),
    };
    let results = uc.execute(&q).await?;
    Ok(Json(SearchResponse {
        query: q,
        books: results.books.into_iter().map(BookResponse::from).collect(),
        authors: results
            .authors
            .into_iter()
            .map(AuthorResponse::from)
            .collect(),
    }))
}
