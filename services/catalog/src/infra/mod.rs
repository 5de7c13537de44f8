pub mod db;
pub mod open_library;
