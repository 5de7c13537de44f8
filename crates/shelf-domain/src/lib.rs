//! Domain types shared across Shelf crates.
//!
//! Pure types with no framework dependencies: identifiers, pagination,
//! roles and the Open Library cover URL scheme.

pub mod cover;
pub mod id;
pub mod pagination;
pub mod role;
