//! Request and response types shared across handlers

use doorman_members::Member;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Body served to a principal admitted to a portal page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortalResponse {
    /// Portal area that admitted the request
    #[schema(example = "manager")]
    pub area: String,
    /// Identifier the principal was resolved from
    #[schema(example = "a-1024")]
    pub identifier: String,
    /// Role the resolver derived for the identifier
    #[schema(example = "manager")]
    pub role: String,
}

/// Member sign-up request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignUpRequest {
    #[schema(example = "kim")]
    pub name: String,
    /// Free-form profile text
    pub info: Option<String>,
}

/// Member sign-up response carrying the generated id
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignUpResponse {
    pub id: String,
}

/// Public member information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: String,
    #[schema(example = "kim")]
    pub name: String,
    pub info: Option<String>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            info: member.info,
            joined_at: member.joined_at,
        }
    }
}
