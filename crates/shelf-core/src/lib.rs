//! Cross-cutting infrastructure shared by Shelf services: error envelope,
//! health probes, request-id middleware, tracing setup, env config and a few
//! sea-orm helpers.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
