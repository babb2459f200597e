//! Doorman Core - role taxonomy and request-scoped principal resolution
//!
//! This crate defines the pieces every other Doorman crate builds on: the
//! fixed set of membership roles, the `Principal` resolved once per request
//! from the caller-supplied identifier, and the exact-equality role gate
//! applied before a handler runs.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
