use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::domain::types::SearchResults;
use crate::error::CatalogServiceError;

pub struct SearchUseCase<B, A>
where
    B: BookRepository,
    A: AuthorRepository,
{
    pub books: B,
    pub authors: A,
}

impl<B, A> SearchUseCase<B, A>
where
    B: BookRepository,
    A: AuthorRepository,
{
    /// Books matching by title or author name, and authors with books matching
    /// by name. A blank query matches nothing.
    pub async fn execute(&self, query: &str) -> Result<SearchResults, CatalogServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::default());
        }
        let books = self.books.search(query).await?;
        let authors = self.authors.search_with_books(query).await?;
        Ok(SearchResults { books, authors })
    }
}
