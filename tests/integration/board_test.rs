//! Integration tests for board operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_board_defaults_to_public() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    let response = app
        .request(
            "POST",
            "/api/boards",
            Some(json!({ "name": "Campus", "about": "Everything on campus." })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["publicStatus"], true);
    assert_eq!(response.body["owner"], "owner-1");
    assert_eq!(response.body["events"], json!([]));
}

#[tokio::test]
async fn test_create_board_requires_name() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    let response = app
        .request("POST", "/api/boards", Some(json!({})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().starts_with("Board validation failed:"));
}

#[tokio::test]
async fn test_create_board_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/boards", Some(json!({ "name": "Campus" })), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_private_boards_are_not_listed() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    app.create_board("Campus", &token).await;
    let hidden = app
        .request(
            "POST",
            "/api/boards",
            Some(json!({ "name": "Staff only", "publicStatus": false })),
            Some(&token),
        )
        .await;
    assert_eq!(hidden.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/boards", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|b| b["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Campus"]);

    let direct = app
        .request("GET", &format!("/api/boards/{}", hidden.id()), None, None)
        .await;
    assert_eq!(direct.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_board_with_malformed_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/boards/invalid_id_type", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Board not found.");
}

#[tokio::test]
async fn test_non_owner_cannot_update_board() {
    let app = TestApp::new();
    let owner = app.token("owner-1");
    let board = app.create_board("Campus", &owner).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/boards/{board}"),
            Some(json!({ "name": "Mine now" })),
            Some(&app.token("intruder")),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let renamed = app
        .request(
            "PATCH",
            &format!("/api/boards/{board}"),
            Some(json!({ "name": "Main campus" })),
            Some(&owner),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], "Main campus");
}

#[tokio::test]
async fn test_delete_board_cascades_to_events_and_clubs() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    let club = app.create_club("Chess", &token).await;
    let event = app.create_event("Blitz night", &board, Some(&club)).await;

    let intruder = app
        .request(
            "DELETE",
            &format!("/api/boards/{board}"),
            None,
            Some(&app.token("intruder")),
        )
        .await;
    assert_eq!(intruder.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/boards/{board}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/events/{event}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let club_doc = app
        .request("GET", &format!("/api/clubs/{club}"), None, None)
        .await;
    assert_eq!(club_doc.body["events"], json!([]));
}
