use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use shelf_domain::cover::{CoverSize, cover_url};

use crate::domain::repository::OpenLibraryPort;
use crate::domain::types::{RemoteBook, UNKNOWN_TITLE};
use crate::error::CatalogServiceError;

/// Fields requested from `search.json`; everything else is dropped server-side.
pub const SEARCH_FIELDS: &str = "key,title,author_name,first_publish_year,isbn,cover_i,subject";

/// HTTP client implementing `OpenLibraryPort` against the public Open Library API.
#[derive(Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
    covers_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: &str, covers_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shelf-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build Open Library HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            covers_url: covers_url.to_owned(),
        })
    }
}

impl OpenLibraryPort for OpenLibraryClient {
    async fn search(
        &self,
        title: &str,
        limit: u32,
    ) -> Result<Vec<RemoteBook>, CatalogServiceError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("title", title),
                ("limit", limit.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await
            .context("send Open Library search")?
            .error_for_status()
            .context("Open Library search status")?;
        let body: SearchResponse = response
            .json()
            .await
            .context("decode Open Library search")?;
        Ok(body
            .docs
            .into_iter()
            .map(|doc| doc.into_remote(&self.covers_url))
            .collect())
    }

    async fn details(&self, key: &str) -> Result<Option<serde_json::Value>, CatalogServiceError> {
        let response = self
            .client
            .get(format!("{}{key}.json", self.base_url))
            .send()
            .await
            .context("send Open Library details")?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: serde_json::Value = response
            .error_for_status()
            .context("Open Library details status")?
            .json()
            .await
            .context("decode Open Library details")?;
        Ok(Some(document))
    }
}

// ── Remote payload ───────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

/// One `docs[]` entry. Every field may be absent or null.
#[derive(Debug, Default, Deserialize)]
struct SearchDoc {
    key: Option<String>,
    title: Option<String>,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<i64>,
    isbn: Option<Vec<String>>,
    cover_i: Option<i64>,
    subject: Option<Vec<String>>,
}

impl SearchDoc {
    fn into_remote(self, covers_url: &str) -> RemoteBook {
        RemoteBook {
            external_key: self.key.filter(|k| !k.trim().is_empty()),
            title: self
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_owned()),
            author_names: self.author_name.unwrap_or_default(),
            publication_year: self
                .first_publish_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            isbn: self
                .isbn
                .and_then(|isbns| isbns.into_iter().next())
                .unwrap_or_default(),
            cover_image: cover_url(covers_url, self.cover_i, CoverSize::Medium),
            subjects: self.subject.unwrap_or_default(),
        }
    }
}
