//! Request-scoped access control using Axum extractors
//!
//! A gated route names one of the `Require*` extractors in its handler
//! signature. Extraction resolves the request's [`Principal`] (reusing one
//! attached by the pipeline middleware when present), applies the route's
//! role requirement, and rejects the request before the handler body runs
//! when resolution fails or the gate denies.

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use doorman_core::{AccessError, Principal, Role, RoleRequirement};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Query parameter the resolver reads the raw identifier from
pub const USER_ID_PARAM: &str = "userId";

/// Rejection produced by principal resolution or the role gate
///
/// These responses are status-only with empty bodies: 400 when the
/// identifier is missing, 403 when the gate denies. Details are logged,
/// not put on the wire.
#[derive(Debug)]
pub struct AccessRejection(pub AccessError);

impl From<AccessError> for AccessRejection {
    fn from(error: AccessError) -> Self {
        Self(error)
    }
}

impl IntoResponse for AccessRejection {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AccessError::MissingIdentifier => StatusCode::BAD_REQUEST,
            AccessError::RoleMismatch { .. } => StatusCode::FORBIDDEN,
        };
        status.into_response()
    }
}

/// Resolve the request's principal from its parts.
///
/// A principal attached by [`crate::middleware::principal_context`] is
/// reused as-is, keeping resolution at once per request; otherwise the
/// identifier is read from the `userId` query parameter and resolved
/// directly, so gated routes also work without the middleware installed.
pub async fn principal_from_parts(parts: &mut Parts) -> Result<Principal, AccessRejection> {
    if let Some(principal) = parts.extensions.get::<Principal>() {
        return Ok(principal.clone());
    }

    let params = match Query::<HashMap<String, String>>::from_request_parts(parts, &()).await {
        Ok(Query(params)) => params,
        Err(rejection) => {
            // An unreadable query string cannot supply an identifier
            debug!("Failed to read query string: {}", rejection);
            return Err(AccessRejection(AccessError::MissingIdentifier));
        }
    };

    let principal =
        Principal::resolve(params.get(USER_ID_PARAM).map(String::as_str)).map_err(|err| {
            debug!("Principal resolution failed: {}", err);
            AccessRejection(err)
        })?;

    debug!(
        "Resolved principal '{}' as {}",
        principal.identifier, principal.role
    );
    Ok(principal)
}

/// Apply a route's role requirement to a resolved principal
fn gate(principal: Principal, required: Role) -> Result<Principal, AccessRejection> {
    RoleRequirement::new(required)
        .check(&principal)
        .map_err(|err| {
            warn!("Denied '{}': {}", principal.identifier, err);
            AccessRejection(err)
        })?;
    Ok(principal)
}

/// Extractor admitting only principals resolved as managers
pub struct RequireManager(pub Principal);

impl<S> FromRequestParts<S> for RequireManager
where
    S: Send + Sync,
{
    type Rejection = AccessRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = principal_from_parts(parts).await?;
        Ok(RequireManager(gate(principal, Role::Manager)?))
    }
}

/// Extractor admitting only principals resolved as VIP members
#[derive(Debug)]
pub struct RequireVip(pub Principal);

impl<S> FromRequestParts<S> for RequireVip
where
    S: Send + Sync,
{
    type Rejection = AccessRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = principal_from_parts(parts).await?;
        Ok(RequireVip(gate(principal, Role::VipMember)?))
    }
}

/// Extractor admitting only principals resolved as plain members
pub struct RequireMember(pub Principal);

impl<S> FromRequestParts<S> for RequireMember
where
    S: Send + Sync,
{
    type Rejection = AccessRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = principal_from_parts(parts).await?;
        Ok(RequireMember(gate(principal, Role::Member)?))
    }
}
