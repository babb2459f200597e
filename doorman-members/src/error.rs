//! Error types for the member registry

use thiserror::Error;

pub type MembersResult<T> = Result<T, MembersError>;

/// Errors produced by member registration and lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembersError {
    /// Sign-up was submitted without a usable member name
    #[error("member name cannot be empty")]
    EmptyName,

    /// A member with the same name is already registered
    #[error("a member named '{0}' already exists")]
    DuplicateName(String),
}
