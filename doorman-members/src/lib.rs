//! Doorman Members - member registry domain
//!
//! A deliberately small registry: records live in an in-memory store and
//! make no durability promises. Sign-up hands back the generated member id,
//! lookups hand back the stored record.

pub mod error;
pub mod service;
pub mod store;

pub use error::*;
pub use service::*;
pub use store::*;
