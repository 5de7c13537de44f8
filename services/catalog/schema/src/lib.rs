//! sea-orm entities for the catalog service.

pub mod accounts;
pub mod authors;
pub mod book_authors;
pub mod books;
pub mod comments;
pub mod favorites;
