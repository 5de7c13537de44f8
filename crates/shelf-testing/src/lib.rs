//! Test utilities for Shelf services.
//!
//! Import from `[dev-dependencies]` only; never in production code.

pub mod auth;
