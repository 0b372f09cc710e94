//! Integration tests for health endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["store"]["provider"], "memory");
    assert_eq!(response.body["store"]["connected"], true);
}
