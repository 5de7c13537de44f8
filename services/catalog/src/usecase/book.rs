use shelf_domain::id::BookId;
use shelf_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{BookRepository, CommentRepository};
use crate::domain::types::{
    BOOKS_PER_PAGE, BookDetail, BookWithAuthors, CatalogStats, RELATED_BOOKS_LIMIT,
};
use crate::error::CatalogServiceError;

// ── ListBooks (home) ─────────────────────────────────────────────────────────

pub struct HomePage {
    pub books: Page<BookWithAuthors>,
    pub stats: CatalogStats,
}

pub struct ListBooksUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> ListBooksUseCase<R> {
    pub async fn execute(&self, raw_page: Option<&str>) -> Result<HomePage, CatalogServiceError> {
        let page = PageRequest::from_query(raw_page, BOOKS_PER_PAGE);
        let books = self.repo.list(page).await?;
        let stats = self.repo.stats().await?;
        Ok(HomePage { books, stats })
    }
}

// ── GetBookDetail ────────────────────────────────────────────────────────────

pub struct GetBookDetailUseCase<B, C>
where
    B: BookRepository,
    C: CommentRepository,
{
    pub books: B,
    pub comments: C,
}

impl<B, C> GetBookDetailUseCase<B, C>
where
    B: BookRepository,
    C: CommentRepository,
{
    pub async fn execute(&self, id: BookId) -> Result<BookDetail, CatalogServiceError> {
        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        let related = self.books.related(id, RELATED_BOOKS_LIMIT).await?;
        let comments = self.comments.list_for_book(id).await?;
        Ok(BookDetail {
            book,
            related,
            comments,
        })
    }
}

// ── ListBookSummaries (JSON listing) ─────────────────────────────────────────

/// Flat row of the public JSON listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub title: String,
    pub author_name: String,
    pub publication_year: Option<String>,
}

pub struct ListBookSummariesUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> ListBookSummariesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<BookSummary>, CatalogServiceError> {
        let books = self.repo.list_all().await?;
        Ok(books
            .into_iter()
            .map(|entry| BookSummary {
                author_name: entry.primary_author_name().to_owned(),
                title: entry.book.title,
                publication_year: entry.book.publication_year,
            })
            .collect())
    }
}
