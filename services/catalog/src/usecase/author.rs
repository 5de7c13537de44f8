use shelf_domain::id::AuthorId;
use shelf_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::domain::types::{
    AUTHOR_BOOKS_PER_PAGE, AUTHORS_PER_PAGE, Author, AuthorWithCount, BookWithAuthors,
};
use crate::error::CatalogServiceError;

// ── ListAuthors ──────────────────────────────────────────────────────────────

pub struct ListAuthorsUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> ListAuthorsUseCase<R> {
    /// A blank `search` lists every author that has books.
    pub async fn execute(
        &self,
        search: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<Page<AuthorWithCount>, CatalogServiceError> {
        let filter = search.map(str::trim).filter(|s| !s.is_empty());
        let page = PageRequest::from_query(raw_page, AUTHORS_PER_PAGE);
        self.repo.list_with_books(filter, page).await
    }
}

// ── GetAuthorBooks ───────────────────────────────────────────────────────────

pub struct AuthorBooks {
    pub author: Author,
    pub books: Page<BookWithAuthors>,
}

pub struct GetAuthorBooksUseCase<A, B>
where
    A: AuthorRepository,
    B: BookRepository,
{
    pub authors: A,
    pub books: B,
}

impl<A, B> GetAuthorBooksUseCase<A, B>
where
    A: AuthorRepository,
    B: BookRepository,
{
    pub async fn execute(
        &self,
        id: AuthorId,
        raw_page: Option<&str>,
    ) -> Result<AuthorBooks, CatalogServiceError> {
        let author = self
            .authors
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::AuthorNotFound)?;
        let page = PageRequest::from_query(raw_page, AUTHOR_BOOKS_PER_PAGE);
        let books = self.books.list_by_author(id, page).await?;
        Ok(AuthorBooks { author, books })
    }
}
