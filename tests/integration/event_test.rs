//! Integration tests for event operations and board/club list upkeep.

use chrono::{Duration, TimeZone, Utc};
use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use clubhub_database::EventStore;
use clubhub_entity::event::Event;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_create_event_appends_to_board_and_club() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    let club = app.create_club("Chess", &token).await;

    let event = app.create_event("Blitz night", &board, Some(&club)).await;

    assert_eq!(app.board_events(&board).await, vec![event.clone()]);
    let club_doc = app
        .request("GET", &format!("/api/clubs/{club}"), None, None)
        .await;
    assert_eq!(club_doc.body["events"], json!([event]));
}

#[tokio::test]
async fn test_create_event_accepts_plain_date() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({
                "title": "Open mic",
                "description": "d",
                "date": "2024-03-01",
                "belongsToBoard": board,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["date"], "2024-03-01T00:00:00Z");
    assert_eq!(app.board_events(&board).await, vec![response.id()]);
}

#[tokio::test]
async fn test_create_event_with_unreadable_date_names_the_cast() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;

    let mut body = helpers::event_body("Open mic", &board);
    body["date"] = json!("someday");
    let response = app.request("POST", "/api/events", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        "Event validation failed: date: Cast to Date failed for value \"someday\" at path \"date\""
    );
    assert!(app.board_events(&board).await.is_empty());
}

#[tokio::test]
async fn test_create_event_on_missing_board_persists_nothing() {
    let app = TestApp::new();

    for board in ["invalid_id_type", "00000000-0000-0000-0000-999999999999"] {
        let response = app
            .request(
                "POST",
                "/api/events",
                Some(helpers::event_body("Orphan", board)),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error(), "Board not found.");
    }

    let events = app.request("GET", "/api/events", None, None).await;
    assert_eq!(events.body, json!([]));
}

#[tokio::test]
async fn test_create_event_with_long_title_is_bad_request() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(helpers::event_body(&"x".repeat(31), &board)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        "Event validation failed: title: Event title can not be longer than 30 characters."
    );
    assert!(app.board_events(&board).await.is_empty());
}

#[tokio::test]
async fn test_create_event_with_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/events", Some(json!({ "tags": "not-a-list" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_list_events_newest_first() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board: Uuid = app
        .create_board("Campus", &token)
        .await
        .parse()
        .expect("board id");

    let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    for (offset, title) in [(1, "Second"), (0, "First"), (2, "Third")] {
        let created_at = base + Duration::minutes(offset);
        let event = Event {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: "Seeded directly.".to_string(),
            contact: None,
            tags: Vec::new(),
            date: Some(base),
            time: None,
            location: None,
            preview: None,
            belongs_to_board: board,
            belongs_to_club: None,
            created_at,
            updated_at: created_at,
        };
        app.store.insert(&event).await.expect("insert event");
    }

    let response = app.request("GET", "/api/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_get_event_with_malformed_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/events/invalid_id_type", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Event not found.");
}

#[tokio::test]
async fn test_patch_title_keeps_other_fields() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    let id = app.create_event("Blitz night", &board, None).await;

    let before = app
        .request("GET", &format!("/api/events/{id}"), None, None)
        .await;
    let response = app
        .request(
            "PATCH",
            &format!("/api/events/{id}"),
            Some(json!({ "title": "Updated Title." })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Updated Title.");
    for field in ["description", "date", "belongsToBoard", "createdAt", "tags"] {
        assert_eq!(response.body[field], before.body[field], "{field} changed");
    }
}

#[tokio::test]
async fn test_patch_with_long_title_is_bad_request() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    let id = app.create_event("Blitz night", &board, None).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/events/{id}"),
            Some(json!({ "title": "y".repeat(40) })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let stored = app
        .request("GET", &format!("/api/events/{id}"), None, None)
        .await;
    assert_eq!(stored.body["title"], "Blitz night");
}

#[tokio::test]
async fn test_reassignment_moves_event_between_boards() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let first = app.create_board("Campus", &token).await;
    let second = app.create_board("Downtown", &token).await;
    let id = app.create_event("Blitz night", &first, None).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/events/{id}"),
            Some(json!({ "belongsToBoard": second })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["belongsToBoard"], second.as_str());
    assert!(app.board_events(&first).await.is_empty());
    assert_eq!(app.board_events(&second).await, vec![id]);
}

#[tokio::test]
async fn test_delete_event_shrinks_board_list_by_one() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    let keep = app.create_event("Keep", &board, None).await;
    let doomed = app.create_event("Doomed", &board, None).await;
    assert_eq!(app.board_events(&board).await.len(), 2);

    let response = app
        .request("DELETE", &format!("/api/events/{doomed}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Doomed");

    assert_eq!(app.board_events(&board).await, vec![keep]);

    let again = app
        .request("DELETE", &format!("/api/events/{doomed}"), None, None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_board_events_are_hydrated() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let board = app.create_board("Campus", &token).await;
    app.create_event("Blitz night", &board, None).await;

    let response = app
        .request("GET", &format!("/api/boards/{board}/events"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["title"], "Blitz night");
    assert_eq!(response.body[0]["belongsToBoard"], board.as_str());
}
