//! End-to-end scenarios against the in-memory backend

use coaching_api::api::AppState;
use coaching_api::domain::{DomainError, FeedbackTarget, TargetType, TeamId, TeamMemberId};
use coaching_api::infrastructure::feedback::CreateFeedbackRequest;
use coaching_api::infrastructure::team::CreateTeamRequest;
use coaching_api::infrastructure::team_member::CreateTeamMemberRequest;

fn team(name: &str) -> CreateTeamRequest {
    CreateTeamRequest {
        name: name.to_string(),
        logo: None,
    }
}

fn member(name: &str, email: &str) -> CreateTeamMemberRequest {
    CreateTeamMemberRequest {
        name: name.to_string(),
        email: email.to_string(),
        picture: None,
    }
}

fn feedback(content: &str, target_type: TargetType, target_id: i64) -> CreateFeedbackRequest {
    CreateFeedbackRequest {
        content: content.to_string(),
        target_type,
        target_id,
    }
}

#[tokio::test]
async fn assign_then_remove_member() {
    let state = AppState::in_memory();

    let dev = state.team_service.create(team("Dev Team")).await.unwrap();
    assert_eq!(dev.id(), TeamId::new(1));

    let john = state
        .team_member_service
        .create(member("John Doe", "john@example.com"))
        .await
        .unwrap();
    assert_eq!(john.id(), TeamMemberId::new(1));

    state.assignment_service.assign(dev.id(), john.id()).await.unwrap();

    let members = state.team_service.get_members(dev.id()).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id(), john.id());

    state.assignment_service.remove(dev.id(), john.id()).await.unwrap();
    assert!(state.team_service.get_members(dev.id()).await.unwrap().is_empty());
}

#[tokio::test]
async fn feedback_requires_existing_target() {
    let state = AppState::in_memory();
    state.team_service.create(team("Dev Team")).await.unwrap();

    let entry = state
        .feedback_service
        .create(feedback("Great work!", TargetType::Team, 1))
        .await
        .unwrap();
    assert_eq!(entry.id().value(), 1);
    assert!(entry.created_at().timestamp() > 0);

    let missing = state
        .feedback_service
        .create(feedback("Great work!", TargetType::Team, 999))
        .await;
    assert!(matches!(missing, Err(DomainError::InvalidTarget { .. })));

    let for_team = state
        .feedback_service
        .list_by_target(FeedbackTarget::team(1).unwrap())
        .await
        .unwrap();
    assert_eq!(for_team.len(), 1);
}

#[tokio::test]
async fn duplicate_email_and_duplicate_assignment_fail() {
    let state = AppState::in_memory();
    let dev = state.team_service.create(team("Dev Team")).await.unwrap();
    let john = state
        .team_member_service
        .create(member("John Doe", "john@example.com"))
        .await
        .unwrap();

    let dup = state
        .team_member_service
        .create(member("Johnny", "john@example.com"))
        .await;
    assert!(dup.unwrap_err().is_conflict());

    state.assignment_service.assign(dev.id(), john.id()).await.unwrap();
    let again = state.assignment_service.assign(dev.id(), john.id()).await;
    assert!(again.unwrap_err().is_conflict());
}

#[tokio::test]
async fn deleting_team_clears_assignments_but_keeps_feedback() {
    let state = AppState::in_memory();
    let dev = state.team_service.create(team("Dev Team")).await.unwrap();
    let john = state
        .team_member_service
        .create(member("John Doe", "john@example.com"))
        .await
        .unwrap();
    state.assignment_service.assign(dev.id(), john.id()).await.unwrap();
    state
        .feedback_service
        .create(feedback("Ship it", TargetType::Team, dev.id().value()))
        .await
        .unwrap();

    state.team_service.delete(dev.id()).await.unwrap();

    assert!(state.team_service.list().await.unwrap().is_empty());
    assert!(state.team_service.get(dev.id()).await.unwrap_err().is_not_found());

    // A new team never inherits the old assignments
    let ops = state.team_service.create(team("Ops Team")).await.unwrap();
    let listed = state.assignment_service.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), ops.id());
    assert!(listed[0].members().is_empty());

    // The member itself survives
    assert_eq!(state.team_member_service.list().await.unwrap().len(), 1);
    assert_eq!(state.feedback_service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn member_can_belong_to_several_teams() {
    let state = AppState::in_memory();
    let dev = state.team_service.create(team("Dev Team")).await.unwrap();
    let ops = state.team_service.create(team("Ops Team")).await.unwrap();
    let jane = state
        .team_member_service
        .create(member("Jane Smith", "jane@example.com"))
        .await
        .unwrap();

    state.assignment_service.assign(dev.id(), jane.id()).await.unwrap();
    state.assignment_service.assign(ops.id(), jane.id()).await.unwrap();

    state.team_service.remove_member(dev.id(), jane.id()).await.unwrap();

    assert!(state.team_service.get_members(dev.id()).await.unwrap().is_empty());
    assert_eq!(state.team_service.get_members(ops.id()).await.unwrap().len(), 1);
}
