use chrono::{DateTime, Utc};

use shelf_domain::id::{AccountId, AuthorId, BookId, CommentId};

/// Books per page on the home listing.
pub const BOOKS_PER_PAGE: u64 = 10;
/// Authors per page on the author index.
pub const AUTHORS_PER_PAGE: u64 = 12;
/// Books per page on an author's page.
pub const AUTHOR_BOOKS_PER_PAGE: u64 = 12;
/// Books per page on the favorites listing.
pub const FAVORITES_PER_PAGE: u64 = 12;
/// Maximum related books shown on a book detail page.
pub const RELATED_BOOKS_LIMIT: u64 = 4;

/// Title used when a remote record has none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Author name reported by the JSON listing for a book with no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Reported as `latest_year` when no book has a publication year.
pub const NO_YEAR: &str = "N/A";

/// Remote lookup limits for the admin search preview.
pub const DEFAULT_REMOTE_SEARCH_LIMIT: u32 = 5;
pub const MAX_REMOTE_SEARCH_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub birth_date: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An author annotated with the number of books linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithCount {
    pub author: Author,
    pub book_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub cover_image: Option<String>,
    pub publication_year: Option<String>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub external_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A book with its authors, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookWithAuthors {
    pub book: Book,
    pub authors: Vec<Author>,
}

impl BookWithAuthors {
    /// Name of the alphabetically first author, or [`UNKNOWN_AUTHOR`].
    pub fn primary_author_name(&self) -> &str {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .min()
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// A comment joined with the commenter's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub book_id: BookId,
    pub user_id: AccountId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub user_id: AccountId,
    pub book_id: BookId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Catalog-wide counters shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_books: u64,
    pub total_authors: u64,
    /// Greatest non-empty publication year, compared as text.
    pub latest_year: Option<String>,
}

/// A book detail page: the book, up to [`RELATED_BOOKS_LIMIT`] books sharing
/// an author, and the book's comments newest first.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: BookWithAuthors,
    pub related: Vec<BookWithAuthors>,
    pub comments: Vec<Comment>,
}

/// Search hits for a free-text query.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub books: Vec<BookWithAuthors>,
    pub authors: Vec<AuthorWithCount>,
}

/// A remote Open Library search hit, normalized at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBook {
    /// Work key such as `/works/OL45883W`; `None` when absent or empty.
    pub external_key: Option<String>,
    pub title: String,
    pub author_names: Vec<String>,
    /// First publish year as text, empty when unknown.
    pub publication_year: String,
    /// First ISBN, empty when unknown.
    pub isbn: String,
    /// Medium cover URL, empty when the record has no cover.
    pub cover_image: String,
    pub subjects: Vec<String>,
}

/// Everything needed to persist an imported book together with its authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub publication_year: String,
    pub isbn: String,
    pub cover_image: String,
    pub external_key: Option<String>,
    /// Distinct author names in remote order, exactly as the remote spells them.
    pub author_names: Vec<String>,
}

impl From<RemoteBook> for NewBook {
    fn from(remote: RemoteBook) -> Self {
        let mut author_names: Vec<String> = Vec::with_capacity(remote.author_names.len());
        for name in remote.author_names {
            if !name.trim().is_empty() && !author_names.contains(&name) {
                author_names.push(name);
            }
        }
        Self {
            title: remote.title,
            publication_year: remote.publication_year,
            isbn: remote.isbn,
            cover_image: remote.cover_image,
            external_key: remote.external_key,
            author_names,
        }
    }
}

/// Result of an import: either the already-stored book or a freshly created one.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    Existing(BookWithAuthors),
    Created(BookWithAuthors),
}

impl ImportOutcome {
    pub fn book(&self) -> &BookWithAuthors {
        match self {
            Self::Existing(b) | Self::Created(b) => b,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
