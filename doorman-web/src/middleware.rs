//! Principal pipeline middleware
//!
//! The middleware-first variant of the access layer: resolution runs once,
//! ahead of the handler, and the resolved principal rides along in the
//! request extensions as the per-request context object.

use crate::access::principal_from_parts;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Resolve the request's principal before any handler runs.
///
/// On success the principal is attached to the request extensions for
/// downstream extractors to read. On failure the request is answered
/// immediately and no handler is invoked.
pub async fn principal_context(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    match principal_from_parts(&mut parts).await {
        Ok(principal) => {
            parts.extensions.insert(principal);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(rejection) => rejection.into_response(),
    }
}
