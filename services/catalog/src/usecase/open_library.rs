use crate::domain::repository::OpenLibraryPort;
use crate::domain::types::{DEFAULT_REMOTE_SEARCH_LIMIT, MAX_REMOTE_SEARCH_LIMIT, RemoteBook};
use crate::error::CatalogServiceError;

// ── SearchRemote ─────────────────────────────────────────────────────────────

pub struct SearchRemoteUseCase<P: OpenLibraryPort> {
    pub open_library: P,
}

impl<P: OpenLibraryPort> SearchRemoteUseCase<P> {
    /// Preview Open Library hits without storing anything. A remote failure
    /// yields an empty list.
    pub async fn execute(
        &self,
        title: &str,
        limit: Option<u32>,
    ) -> Result<Vec<RemoteBook>, CatalogServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CatalogServiceError::MissingTitle);
        }
        let limit = limit
            .unwrap_or(DEFAULT_REMOTE_SEARCH_LIMIT)
            .clamp(1, MAX_REMOTE_SEARCH_LIMIT);

        match self.open_library.search(title, limit).await {
            Ok(hits) => Ok(hits),
            Err(e) => {
                tracing::warn!(error = ?e, title, "Open Library search failed");
                Ok(Vec::new())
            }
        }
    }
}

// ── RemoteDetails ────────────────────────────────────────────────────────────

/// `/works/OL45883W`, `/authors/OL23919A`: a leading slash, then ASCII
/// letters, digits, `/`, `_` or `-`.
fn is_valid_remote_key(key: &str) -> bool {
    key.len() > 1
        && key.starts_with('/')
        && !key.contains("..")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-'))
}

pub struct RemoteDetailsUseCase<P: OpenLibraryPort> {
    pub open_library: P,
}

impl<P: OpenLibraryPort> RemoteDetailsUseCase<P> {
    pub async fn execute(&self, key: &str) -> Result<serde_json::Value, CatalogServiceError> {
        let key = key.trim();
        if !is_valid_remote_key(key) {
            return Err(CatalogServiceError::InvalidRemoteKey);
        }
        match self.open_library.details(key).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Err(CatalogServiceError::RemoteRecordNotFound),
            Err(e) => {
                tracing::warn!(error = ?e, key, "Open Library details failed");
                Err(CatalogServiceError::RemoteRecordNotFound)
            }
        }
    }
}
