//! OpenAPI documentation configuration
//!
//! This module defines the OpenAPI specification for the Doorman REST API
//! using utoipa annotations.

use utoipa::OpenApi;

use crate::handlers::{
    HealthResponse, MemberResponse, PortalResponse, SignUpRequest, SignUpResponse,
};

/// OpenAPI documentation for the Doorman API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doorman API",
        version = "0.1.0",
        description = "Role-gated portal pages backed by a query-string principal resolver",
        contact(name = "Doorman Team"),
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::manager_portal,
        crate::handlers::vip_portal,
        crate::handlers::member_portal,
        crate::handlers::sign_up_member,
        crate::handlers::get_member,
    ),
    components(schemas(
        HealthResponse,
        PortalResponse,
        SignUpRequest,
        SignUpResponse,
        MemberResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Portal", description = "Role-gated portal pages"),
        (name = "Members", description = "Member registry operations"),
    )
)]
pub struct ApiDoc;
