//! REST handlers for the coaching API

pub mod assignments;
pub mod feedback;
pub mod team_members;
pub mod teams;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::state::AppState;

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the `/api` router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/team-members", post(team_members::create_team_member))
        .route("/team-members", get(team_members::list_team_members))
        .route("/team-members/{id}", get(team_members::get_team_member))
        .route("/teams", post(teams::create_team))
        .route("/teams", get(teams::list_teams))
        .route("/teams/{id}", get(teams::get_team))
        .route("/teams/{id}", delete(teams::delete_team))
        .route("/teams/{id}/members", get(teams::get_team_members))
        .route(
            "/teams/{id}/members/{member_id}",
            delete(teams::remove_team_member),
        )
        .route("/assignments", post(assignments::assign_member))
        .route("/assignments", get(assignments::list_assignments))
        .route("/assignments", delete(assignments::remove_assignment))
        .route("/feedback", post(feedback::create_feedback))
        .route("/feedback", get(feedback::list_feedback))
        .route("/feedback/team/{id}", get(feedback::list_team_feedback))
        .route("/feedback/member/{id}", get(feedback::list_member_feedback))
}
