#![allow(async_fn_in_trait)]

use shelf_domain::id::{AccountId, AuthorId, BookId};
use shelf_domain::pagination::{Page, PageRequest};

use crate::domain::types::{
    Account, Author, AuthorWithCount, BookWithAuthors, CatalogStats, Comment, Favorite, NewBook,
    RemoteBook,
};
use crate::error::CatalogServiceError;

/// Repository for books and their author links.
pub trait BookRepository: Send + Sync {
    /// All books newest first, one resolved page, authors loaded.
    async fn list(&self, page: PageRequest)
    -> Result<Page<BookWithAuthors>, CatalogServiceError>;

    /// Every book newest first, authors loaded. Backs the JSON listing.
    async fn list_all(&self) -> Result<Vec<BookWithAuthors>, CatalogServiceError>;

    async fn find_by_id(&self, id: BookId)
    -> Result<Option<BookWithAuthors>, CatalogServiceError>;

    async fn exists(&self, id: BookId) -> Result<bool, CatalogServiceError>;

    /// Oldest book carrying `external_key`, if any.
    async fn find_by_external_key(
        &self,
        external_key: &str,
    ) -> Result<Option<BookWithAuthors>, CatalogServiceError>;

    /// Books sharing at least one author with `id`, excluding `id`, newest first.
    async fn related(
        &self,
        id: BookId,
        limit: u64,
    ) -> Result<Vec<BookWithAuthors>, CatalogServiceError>;

    /// Books linked to `author_id`, newest first, one resolved page.
    async fn list_by_author(
        &self,
        author_id: AuthorId,
        page: PageRequest,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError>;

    /// Books whose title or any author's name contains `query` (case-insensitive).
    async fn search(&self, query: &str) -> Result<Vec<BookWithAuthors>, CatalogServiceError>;

    async fn stats(&self) -> Result<CatalogStats, CatalogServiceError>;

    /// Insert the book, get-or-create each author by exact name and link them,
    /// all in one transaction.
    async fn create_with_authors(
        &self,
        book: &NewBook,
    ) -> Result<BookWithAuthors, CatalogServiceError>;
}

/// Repository for authors.
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogServiceError>;

    /// Authors with at least one book, by name, annotated with book counts.
    /// `name_filter` is a case-insensitive substring match.
    async fn list_with_books(
        &self,
        name_filter: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<AuthorWithCount>, CatalogServiceError>;

    /// Unpaginated variant of [`AuthorRepository::list_with_books`] used by search.
    async fn search_with_books(
        &self,
        query: &str,
    ) -> Result<Vec<AuthorWithCount>, CatalogServiceError>;
}

/// Repository for book comments.
pub trait CommentRepository: Send + Sync {
    /// Comments on a book, newest first.
    async fn list_for_book(&self, book_id: BookId) -> Result<Vec<Comment>, CatalogServiceError>;

    async fn create(
        &self,
        book_id: BookId,
        author: &Account,
        content: &str,
    ) -> Result<Comment, CatalogServiceError>;
}

/// Repository for favorites.
pub trait FavoriteRepository: Send + Sync {
    /// Insert the pair if absent and return the stored row.
    async fn add(
        &self,
        user_id: AccountId,
        book_id: BookId,
    ) -> Result<Favorite, CatalogServiceError>;

    /// Delete the pair. Returns `true` if deleted, `false` if not found.
    async fn remove(&self, user_id: AccountId, book_id: BookId)
    -> Result<bool, CatalogServiceError>;

    /// Favorited books, most recently favorited first.
    async fn list_books(
        &self,
        user_id: AccountId,
        page: PageRequest,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError>;
}

/// Repository for reader accounts.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CatalogServiceError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, CatalogServiceError>;

    /// Insert a new account. A taken username yields
    /// [`CatalogServiceError::AccountAlreadyExists`].
    async fn create(&self, account: &Account) -> Result<(), CatalogServiceError>;
}

/// Port for the Open Library HTTP API.
pub trait OpenLibraryPort: Send + Sync {
    /// Search works by title, at most `limit` hits.
    async fn search(
        &self,
        title: &str,
        limit: u32,
    ) -> Result<Vec<RemoteBook>, CatalogServiceError>;

    /// Raw JSON document for a work or author key (`/works/...`, `/authors/...`).
    /// `Ok(None)` when the remote answers 404.
    async fn details(&self, key: &str) -> Result<Option<serde_json::Value>, CatalogServiceError>;
}
