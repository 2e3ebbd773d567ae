//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::assignment::AssignmentService;
use crate::infrastructure::feedback::FeedbackService;
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::team::TeamService;
use crate::infrastructure::team_member::TeamMemberService;

/// Application state containing the entity services
#[derive(Debug, Clone)]
pub struct AppState {
    pub team_member_service: Arc<TeamMemberService>,
    pub team_service: Arc<TeamService>,
    pub assignment_service: Arc<AssignmentService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    /// Wire every service to the given repositories
    pub fn new(repos: Repositories) -> Self {
        let assignment_service = AssignmentService::new(
            repos.assignments.clone(),
            repos.teams.clone(),
            repos.team_members.clone(),
        );

        Self {
            team_member_service: Arc::new(TeamMemberService::new(repos.team_members.clone())),
            team_service: Arc::new(TeamService::new(
                repos.teams.clone(),
                repos.assignments,
                assignment_service.clone(),
            )),
            assignment_service: Arc::new(assignment_service),
            feedback_service: Arc::new(FeedbackService::new(
                repos.feedback,
                repos.teams,
                repos.team_members,
            )),
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
