//! Identity types shared across Shelf services.
//!
//! Session handling lives in the gateway; services only read the identity it
//! injects via the `IdentityHeaders` extractor.

pub mod identity;
