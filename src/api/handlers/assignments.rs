//! Team assignment endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::teams::TeamResponse;
use super::MessageResponse;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::TeamId;
use crate::domain::team_member::TeamMemberId;

/// Body of both assignment and removal requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssignmentApiRequest {
    pub team_id: i64,
    pub team_member_id: i64,
}

impl AssignmentApiRequest {
    fn ids(&self) -> Result<(TeamId, TeamMemberId), ApiError> {
        if self.team_id <= 0 || self.team_member_id <= 0 {
            return Err(ApiError::bad_request(
                "team_id and team_member_id must be positive integers",
            ));
        }

        Ok((TeamId::new(self.team_id), TeamMemberId::new(self.team_member_id)))
    }
}

/// POST /api/assignments
pub async fn assign_member(
    State(state): State<AppState>,
    Json(request): Json<AssignmentApiRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(
        team_id = request.team_id,
        team_member_id = request.team_member_id,
        "Assigning member"
    );

    let (team_id, member_id) = request.ids()?;
    state.assignment_service.assign(team_id, member_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Member assigned to team successfully")),
    ))
}

/// GET /api/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!("Listing assignments");

    let teams = state.assignment_service.list_all().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// DELETE /api/assignments
pub async fn remove_assignment(
    State(state): State<AppState>,
    Json(request): Json<AssignmentApiRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(
        team_id = request.team_id,
        team_member_id = request.team_member_id,
        "Removing assignment"
    );

    let (team_id, member_id) = request.ids()?;
    state.assignment_service.remove(team_id, member_id).await?;

    Ok(Json(MessageResponse::new("Member removed from team successfully")))
}
