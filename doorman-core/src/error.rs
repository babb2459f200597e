//! Error taxonomy for resolution and gating
//!
//! Both variants are terminal at the boundary where they occur: once either
//! is raised, the route's business logic is never invoked for that request.

use crate::types::Role;
use thiserror::Error;

pub type AccessResult<T> = Result<T, AccessError>;

/// Errors produced while resolving a principal or gating a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The request did not supply the identifier the resolver reads. An
    /// identifier that is present but empty has no first character to
    /// classify and is treated the same way.
    #[error("missing user identifier")]
    MissingIdentifier,

    /// The resolved role does not match the route's required role. Gating
    /// is exact equality over unranked roles, so this is an expected
    /// outcome rather than a fault.
    #[error("role '{resolved}' does not satisfy required role '{required}'")]
    RoleMismatch {
        /// Role the route was registered with
        required: Role,
        /// Role the resolver derived for this request
        resolved: Role,
    },
}

impl AccessError {
    /// Whether this error is the designed deny outcome of the gate, as
    /// opposed to a malformed request.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessError::RoleMismatch { .. })
    }
}
