//! Team member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team_member::{TeamMember, TeamMemberId};
use crate::infrastructure::team_member::CreateTeamMemberRequest;

/// Request to create a new team member
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberApiRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Team member response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id().value(),
            name: member.name().to_string(),
            email: member.email().to_string(),
            picture: member.picture().map(String::from),
        }
    }
}

/// POST /api/team-members
pub async fn create_team_member(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamMemberApiRequest>,
) -> Result<(StatusCode, Json<TeamMemberResponse>), ApiError> {
    debug!(email = %request.email, "Creating team member");

    let member = state
        .team_member_service
        .create(CreateTeamMemberRequest {
            name: request.name,
            email: request.email,
            picture: request.picture,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TeamMemberResponse::from(&member))))
}

/// GET /api/team-members
pub async fn list_team_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMemberResponse>>, ApiError> {
    debug!("Listing team members");

    let members = state.team_member_service.list().await?;

    Ok(Json(members.iter().map(TeamMemberResponse::from).collect()))
}

/// GET /api/team-members/{id}
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamMemberResponse>, ApiError> {
    debug!(id = %id, "Getting team member");

    let id: TeamMemberId = id.parse()?;
    let member = state.team_member_service.get(id).await?;

    Ok(Json(TeamMemberResponse::from(&member)))
}
