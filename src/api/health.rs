//! Health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

const SERVICE_NAME: &str = "coaching-app-backend";
const STORE_UNAVAILABLE: &str = "Store unavailable";

/// Health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthResponse {
    fn new(status: HealthStatus) -> Self {
        Self {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
            latency_ms: None,
        }
    }
}

/// Static liveness payload
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::new(HealthStatus::Healthy)))
}

/// Readiness check; verifies the store answers a query
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let store_check = check_store(&state).await;
    let status = store_check.status;

    let response = HealthResponse {
        checks: Some(vec![store_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
        ..HealthResponse::new(status)
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check for process supervisors
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_store(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.team_member_service.list().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    match result {
        Ok(_) => HealthCheck {
            name: "store".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            latency_ms,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store readiness check failed");
            HealthCheck {
                name: "store".to_string(),
                status: HealthStatus::Unhealthy,
                message: Some(STORE_UNAVAILABLE.to_string()),
                latency_ms,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_value(HealthResponse::new(HealthStatus::Healthy)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "coaching-app-backend");
        assert!(json.get("checks").is_none());
    }

    #[tokio::test]
    async fn test_ready_check_unavailable_when_store_fails() {
        use crate::domain::team_member::MockTeamMemberRepository;
        use crate::infrastructure::storage::Repositories;
        use std::sync::Arc;

        let mut members = MockTeamMemberRepository::new();
        members
            .expect_list()
            .returning(|| Err(crate::domain::DomainError::storage("connection refused")));

        let repos = Repositories {
            team_members: Arc::new(members),
            ..Repositories::in_memory()
        };

        let response = ready_check(State(AppState::new(repos))).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["checks"][0]["message"], "Store unavailable");
        assert!(!bytes.windows(7).any(|w| w == b"refused"));
    }

    #[tokio::test]
    async fn test_store_check_in_memory() {
        let check = check_store(&AppState::in_memory()).await;

        assert_eq!(check.status, HealthStatus::Healthy);
        assert!(check.message.is_none());
    }
}
