pub mod account;
pub mod author;
pub mod book;
pub mod comment;
pub mod favorite;
pub mod import;
pub mod open_library;
pub mod search;
