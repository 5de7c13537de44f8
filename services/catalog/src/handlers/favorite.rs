use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use shelf_auth_types::identity::IdentityHeaders;
use shelf_domain::id::BookId;
use shelf_domain::pagination::Page;

use crate::domain::types::Favorite;
use crate::error::CatalogServiceError;
use crate::handlers::book::{BookResponse, PageQuery};
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase};

#[derive(Serialize)]
pub struct FavoriteResponse {
    pub book_id: BookId,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            book_id: favorite.book_id,
            created_at: favorite.created_at,
        }
    }
}

// ── POST /books/{book_id}/favorite ───────────────────────────────────────────

pub async fn add_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Json<FavoriteResponse>, CatalogServiceError> {
    let uc = AddFavoriteUseCase {
        books: state.book_repo(),
        accounts: state.account_repo(),
        favorites: state.favorite_repo(),
    };
    let favorite = uc.execute(identity.user_id, book_id).await?;
    Ok(Json(favorite.into()))
}

// ── DELETE /books/{book_id}/favorite ─────────────────────────────────────────

pub async fn remove_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<StatusCode, CatalogServiceError> {
    let uc = RemoveFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    uc.execute(identity.user_id, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/@me/favorites ─────────────────────────────────────────────────

pub async fn list_favorites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<BookResponse>>, CatalogServiceError> {
    let uc = ListFavoritesUseCase {
        favorites: state.favorite_repo(),
    };
    let books = uc.execute(identity.user_id, query.page.as_deref()).await?;
    Ok(Json(books.map(BookResponse::from)))
}
