//! Feedback endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::feedback::{Feedback, FeedbackTarget, TargetType};
use crate::domain::{TeamId, TeamMemberId};
use crate::infrastructure::feedback::CreateFeedbackRequest;

/// Request to create a feedback entry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedbackApiRequest {
    pub content: String,
    pub target_type: String,
    pub target_id: i64,
}

/// Feedback response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub content: String,
    pub target_type: TargetType,
    pub target_id: i64,
    pub created_at: String,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id().value(),
            content: feedback.content().to_string(),
            target_type: feedback.target_type(),
            target_id: feedback.target_id(),
            created_at: feedback.created_at().to_rfc3339(),
        }
    }
}

fn to_responses(entries: &[Feedback]) -> Vec<FeedbackResponse> {
    entries.iter().map(FeedbackResponse::from).collect()
}

/// POST /api/feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(request): Json<CreateFeedbackApiRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), ApiError> {
    debug!(
        target_type = %request.target_type,
        target_id = request.target_id,
        "Creating feedback"
    );

    let target_type = request
        .target_type
        .parse::<TargetType>()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let feedback = state
        .feedback_service
        .create(CreateFeedbackRequest {
            content: request.content,
            target_type,
            target_id: request.target_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))))
}

/// GET /api/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackResponse>>, ApiError> {
    debug!("Listing feedback");

    let entries = state.feedback_service.list_all().await?;

    Ok(Json(to_responses(&entries)))
}

/// GET /api/feedback/team/{id}
pub async fn list_team_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FeedbackResponse>>, ApiError> {
    debug!(id = %id, "Listing team feedback");

    let id: TeamId = id.parse()?;
    let target = FeedbackTarget::team(id.value())
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let entries = state.feedback_service.list_by_target(target).await?;

    Ok(Json(to_responses(&entries)))
}

/// GET /api/feedback/member/{id}
pub async fn list_member_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FeedbackResponse>>, ApiError> {
    debug!(id = %id, "Listing member feedback");

    let id: TeamMemberId = id.parse()?;
    let target = FeedbackTarget::member(id.value())
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let entries = state.feedback_service.list_by_target(target).await?;

    Ok(Json(to_responses(&entries)))
}
