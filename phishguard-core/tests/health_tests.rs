// Tests for the startup health probe

mod common;

use common::{RecordingView, StubService, response};
use phishguard_client::{HealthStatus, HttpClassifier, ServiceConfig};
use phishguard_core::{
    HealthOutcome, SubmissionController, SubmissionState, check_health, spawn_health_check,
};
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_loaded_model_is_ready() {
    let service = StubService::answering(response("safe", 0.5, "low", "x")).with_health(HealthStatus {
        status: Some("healthy".into()),
        model_loaded: true,
    });

    assert_eq!(check_health(&service).await, HealthOutcome::Ready);
}

#[tokio::test]
async fn test_missing_model_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "model_loaded": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ServiceConfig::new(&format!("{}/api", mock_server.uri())).unwrap();
    let service = Arc::new(HttpClassifier::new(config).unwrap());

    let outcome = spawn_health_check(service).await.unwrap();
    assert_eq!(outcome, HealthOutcome::ModelNotLoaded);
}

#[tokio::test]
async fn test_unreachable_service_is_diagnostic_only() {
    let config = ServiceConfig::new("http://127.0.0.1:1/api").unwrap();
    let service = Arc::new(HttpClassifier::new(config).unwrap());

    let outcome = spawn_health_check(service).await.unwrap();
    assert!(matches!(outcome, HealthOutcome::Unreachable(_)));
    assert!(!outcome.is_ready());
}

#[tokio::test]
async fn test_health_probe_leaves_submission_state_alone() {
    let service = Arc::new(StubService::answering(response("safe", 0.5, "low", "x")));
    let controller = SubmissionController::new(Arc::clone(&service), RecordingView::new());

    let outcome = spawn_health_check(controller.service()).await.unwrap();

    assert!(matches!(outcome, HealthOutcome::Unreachable(_)));
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert!(controller.view().calls.is_empty());
    assert_eq!(service.calls(), 0);
}
