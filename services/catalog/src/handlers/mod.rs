pub mod account;
pub mod admin;
pub mod author;
pub mod book;
pub mod comment;
pub mod favorite;
pub mod health;
pub mod search;
