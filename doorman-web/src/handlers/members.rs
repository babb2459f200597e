//! Member registry handlers

use super::types::{MemberResponse, SignUpRequest, SignUpResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use doorman_members::{MembersError, NewMember};
use tracing::{info, warn};

/// Register a new member
#[utoipa::path(
    post,
    path = "/api/members",
    tag = "Members",
    summary = "Sign up a member",
    description = "Register a new member and return the generated id",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Member registered", body = SignUpResponse),
        (status = 409, description = "A member with this name already exists"),
        (status = 422, description = "Member name is empty")
    )
)]
pub async fn sign_up_member(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), StatusCode> {
    info!("Signing up member: {}", request.name);

    match state.members.sign_up(NewMember {
        name: request.name,
        info: request.info,
    }) {
        Ok(id) => Ok((StatusCode::CREATED, Json(SignUpResponse { id }))),
        Err(MembersError::EmptyName) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(MembersError::DuplicateName(name)) => {
            warn!("Sign-up rejected, name already taken: {}", name);
            Err(StatusCode::CONFLICT)
        }
    }
}

/// Look up a member by id
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = "Members",
    summary = "Get member information",
    description = "Return the stored record for a member id",
    params(
        ("id" = String, Path, description = "Member id returned by sign-up")
    ),
    responses(
        (status = 200, description = "Member found", body = MemberResponse),
        (status = 404, description = "No member with this id")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberResponse>, StatusCode> {
    match state.members.member(&id) {
        Some(member) => Ok(Json(member.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
