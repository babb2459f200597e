//! Role-gated portal page handlers
//!
//! Each page declares its required role through the extractor in its
//! signature, so the handler body only ever sees admitted principals. The
//! three pages are otherwise identical in shape.

use super::types::PortalResponse;
use crate::access::{RequireManager, RequireMember, RequireVip};
use axum::response::Json;
use doorman_core::Principal;
use tracing::info;

fn portal_page(area: &str, principal: Principal) -> Json<PortalResponse> {
    info!("Admitted '{}' to the {} portal", principal.identifier, area);
    Json(PortalResponse {
        area: area.to_string(),
        role: principal.role.to_string(),
        identifier: principal.identifier,
    })
}

/// Portal page for managers
#[utoipa::path(
    get,
    path = "/portal/manager",
    tag = "Portal",
    summary = "Manager portal page",
    description = "Admits only requests whose identifier resolves to the manager role",
    params(
        ("userId" = String, Query, description = "Raw identifier the role is derived from")
    ),
    responses(
        (status = 200, description = "Principal admitted", body = PortalResponse),
        (status = 400, description = "Identifier missing"),
        (status = 403, description = "Resolved role is not manager")
    )
)]
pub async fn manager_portal(RequireManager(principal): RequireManager) -> Json<PortalResponse> {
    portal_page("manager", principal)
}

/// Portal page for VIP members
#[utoipa::path(
    get,
    path = "/portal/vip",
    tag = "Portal",
    summary = "VIP portal page",
    description = "Admits only requests whose identifier resolves to the VIP member role",
    params(
        ("userId" = String, Query, description = "Raw identifier the role is derived from")
    ),
    responses(
        (status = 200, description = "Principal admitted", body = PortalResponse),
        (status = 400, description = "Identifier missing"),
        (status = 403, description = "Resolved role is not vip_member")
    )
)]
pub async fn vip_portal(RequireVip(principal): RequireVip) -> Json<PortalResponse> {
    portal_page("vip", principal)
}

/// Portal page for plain members
#[utoipa::path(
    get,
    path = "/portal/member",
    tag = "Portal",
    summary = "Member portal page",
    description = "Admits only requests whose identifier resolves to the member role",
    params(
        ("userId" = String, Query, description = "Raw identifier the role is derived from")
    ),
    responses(
        (status = 200, description = "Principal admitted", body = PortalResponse),
        (status = 400, description = "Identifier missing"),
        (status = 403, description = "Resolved role is not member")
    )
)]
pub async fn member_portal(RequireMember(principal): RequireMember) -> Json<PortalResponse> {
    portal_page("member", principal)
}
