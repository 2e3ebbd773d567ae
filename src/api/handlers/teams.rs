//! Team endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::team_members::TeamMemberResponse;
use super::MessageResponse;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::{Team, TeamId};
use crate::domain::team_member::TeamMemberId;
use crate::infrastructure::team::CreateTeamRequest;

/// Request to create a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Team response; `members` is empty unless the team was loaded with them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub members: Vec<TeamMemberResponse>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            logo: team.logo().map(String::from),
            members: team.members().iter().map(TeamMemberResponse::from).collect(),
        }
    }
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state
        .team_service
        .create(CreateTeamRequest {
            name: request.name,
            logo: request.logo,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(id = %id, "Getting team");

    let id: TeamId = id.parse()?;
    let team = state.team_service.get(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /api/teams/{id}/members
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TeamMemberResponse>>, ApiError> {
    debug!(id = %id, "Getting team members");

    let id: TeamId = id.parse()?;
    let members = state.team_service.get_members(id).await?;

    Ok(Json(members.iter().map(TeamMemberResponse::from).collect()))
}

/// DELETE /api/teams/{id}/members/{member_id}
pub async fn remove_team_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id = %id, member_id = %member_id, "Removing team member");

    let id: TeamId = id.parse()?;
    let member_id: TeamMemberId = member_id.parse()?;
    state.team_service.remove_member(id, member_id).await?;

    Ok(Json(MessageResponse::new("Member removed from team successfully")))
}

/// DELETE /api/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id = %id, "Deleting team");

    let id: TeamId = id.parse()?;
    state.team_service.delete(id).await?;

    Ok(Json(MessageResponse::new("Team deleted successfully")))
}
