use crate::domain::repository::{BookRepository, OpenLibraryPort};
use crate::domain::types::{ImportOutcome, NewBook};
use crate::error::CatalogServiceError;

/// Only the top search hit is considered for import.
pub const IMPORT_SEARCH_LIMIT: u32 = 1;

pub struct ImportBookUseCase<P, B>
where
    P: OpenLibraryPort,
    B: BookRepository,
{
    pub open_library: P,
    pub books: B,
}

impl<P, B> ImportBookUseCase<P, B>
where
    P: OpenLibraryPort,
    B: BookRepository,
{
    /// Look `title` up on Open Library and store the top hit.
    ///
    /// Returns the stored book when one already carries the hit's work key.
    /// Remote and persistence failures are logged and reported as `Ok(None)`,
    /// the same as "no hit". Only a blank title is an error.
    pub async fn execute(&self, title: &str) -> Result<Option<ImportOutcome>, CatalogServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CatalogServiceError::MissingTitle);
        }

        let hits = match self.open_library.search(title, IMPORT_SEARCH_LIMIT).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = ?e, title, "Open Library search failed");
                return Ok(None);
            }
        };
        let Some(remote) = hits.into_iter().next() else {
            tracing::info!(title, "no Open Library match");
            return Ok(None);
        };

        if let Some(key) = remote.external_key.as_deref() {
            match self.books.find_by_external_key(key).await {
                Ok(Some(existing)) => {
                    tracing::info!(
                        book_id = %existing.book.id,
                        external_key = key,
                        "book already imported"
                    );
                    return Ok(Some(ImportOutcome::Existing(existing)));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = ?e, external_key = key, "import dedup lookup failed");
                    return Ok(None);
                }
            }
        }

        match self.books.create_with_authors(&NewBook::from(remote)).await {
            Ok(created) => {
                tracing::info!(
                    book_id = %created.book.id,
                    authors = created.authors.len(),
                    "book imported"
                );
                Ok(Some(ImportOutcome::Created(created)))
            }
            Err(e) => {
                tracing::error!(error = ?e, title, "failed to store imported book");
                Ok(None)
            }
        }
    }
}
