use shelf_domain::id::{AccountId, BookId};
use shelf_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{AccountRepository, BookRepository, FavoriteRepository};
use crate::domain::types::{BookWithAuthors, FAVORITES_PER_PAGE, Favorite};
use crate::error::CatalogServiceError;

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<B, A, F>
where
    B: BookRepository,
    A: AccountRepository,
    F: FavoriteRepository,
{
    pub books: B,
    pub accounts: A,
    pub favorites: F,
}

impl<B, A, F> AddFavoriteUseCase<B, A, F>
where
    B: BookRepository,
    A: AccountRepository,
    F: FavoriteRepository,
{
    /// Favoriting an already-favorited book returns the existing row.
    pub async fn execute(
        &self,
        user_id: AccountId,
        book_id: BookId,
    ) -> Result<Favorite, CatalogServiceError> {
        if !self.books.exists(book_id).await? {
            return Err(CatalogServiceError::BookNotFound);
        }
        if self.accounts.find_by_id(user_id).await?.is_none() {
            return Err(CatalogServiceError::Unauthorized);
        }
        self.favorites.add(user_id, book_id).await
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    pub async fn execute(
        &self,
        user_id: AccountId,
        book_id: BookId,
    ) -> Result<(), CatalogServiceError> {
        if self.favorites.remove(user_id, book_id).await? {
            Ok(())
        } else {
            Err(CatalogServiceError::FavoriteNotFound)
        }
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> ListFavoritesUseCase<F> {
    pub async fn execute(
        &self,
        user_id: AccountId,
        raw_page: Option<&str>,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError> {
        let page = PageRequest::from_query(raw_page, FAVORITES_PER_PAGE);
        self.favorites.list_books(user_id, page).await
    }
}
