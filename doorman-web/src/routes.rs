//! Route definitions for the Doorman web server
//!
//! Gated routes declare their role requirement at registration time and
//! never change it per request.

use crate::{handlers, middleware::principal_context, AppState};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Member registry
        .route("/members", post(handlers::sign_up_member))
        .route("/members/{id}", get(handlers::get_member))
}

/// Create the role-gated portal routes
///
/// The three pages are identical in shape and differ only in the role they
/// demand. The principal pipeline stage runs ahead of every route in this
/// group, so resolution failures are answered before routing reaches a
/// handler.
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/manager", get(handlers::manager_portal))
        .route("/vip", get(handlers::vip_portal))
        .route("/member", get(handlers::member_portal))
        .route_layer(from_fn(principal_context))
}
