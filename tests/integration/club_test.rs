//! Integration tests for club operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_create_club_with_required_fields_only() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    let response = app
        .request("POST", "/api/clubs", Some(helpers::club_body("Chess")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Chess");
    assert_eq!(response.body["owner"], "owner-1");
    assert!(response.body["logo"].is_null());
    assert_eq!(response.body["cost"], 0);
    assert_eq!(response.body["isActive"], true);
    assert_eq!(response.body["events"], json!([]));
}

#[tokio::test]
async fn test_create_club_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/clubs", Some(helpers::club_body("Chess")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Unauthenticated.");
}

#[tokio::test]
async fn test_create_club_rejects_foreign_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/clubs",
            Some(helpers::club_body("Chess")),
            Some("not.a.token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_club_missing_name_is_bad_request() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let mut body = helpers::club_body("Chess");
    body.as_object_mut().expect("object").remove("name");

    let response = app
        .request("POST", "/api/clubs", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().starts_with("Club validation failed:"));
    assert!(response.error().contains("Path `name` is required."));
}

#[tokio::test]
async fn test_create_club_with_logo_upload() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    let response = app
        .multipart(
            "/api/clubs",
            &[
                ("name", "Robotics"),
                ("overview", "Build robots."),
                ("description", "Weekly build nights."),
                ("genre", "Engineering"),
                ("cost", "25"),
            ],
            Some(("logo", "crest.PNG", b"\x89PNG")),
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["cost"], 25);
    assert_eq!(response.body["logo"]["extension"], "image/png");
    assert_eq!(response.body["logo"]["data"], "iVBORw==");
}

#[tokio::test]
async fn test_multipart_bad_number_is_bad_request() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    let response = app
        .multipart(
            "/api/clubs",
            &[("name", "Robotics"), ("genre", "Engineering"), ("cost", "free")],
            None,
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("Cast to Number failed"));
}

#[tokio::test]
async fn test_get_club_with_malformed_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/clubs/invalid_id_type", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Club not found.");
    assert_eq!(app.store.queries(), 0);
}

#[tokio::test]
async fn test_get_club_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/clubs/00000000-0000-0000-0000-999999999999",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_filters() {
    let app = TestApp::new();
    let token = app.token("owner-1");

    for (name, genre, cost) in [
        ("Chess Club", "Games", 0),
        ("Chess Masters", "Games", 40),
        ("Choir", "Music", 10),
    ] {
        let mut body = helpers::club_body(name);
        body["genre"] = json!(genre);
        body["cost"] = json!(cost);
        let response = app
            .request("POST", "/api/clubs", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let all = app.request("GET", "/api/clubs", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().map(Vec::len), Some(3));
    assert!(all.body[0].get("description").is_none());

    let chess = app.request("GET", "/api/clubs?name=chess", None, None).await;
    assert_eq!(chess.body.as_array().map(Vec::len), Some(2));

    let cheap = app
        .request("GET", "/api/clubs?name=chess&cost=10", None, None)
        .await;
    assert_eq!(cheap.body.as_array().map(Vec::len), Some(1));
    assert_eq!(cheap.body[0]["name"], "Chess Club");

    let music = app.request("GET", "/api/clubs?genre=Music", None, None).await;
    assert_eq!(music.body.as_array().map(Vec::len), Some(1));

    let garbage = app.request("GET", "/api/clubs?cost=lots", None, None).await;
    assert_eq!(garbage.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_update_club_by_owner() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let id = app.create_club("Chess", &token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}"),
            Some(json!({ "overview": "Now with blitz.", "owner": "someone-else" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["overview"], "Now with blitz.");
    assert_eq!(response.body["name"], "Chess");
    assert_eq!(response.body["owner"], "owner-1");
}

#[tokio::test]
async fn test_update_with_wrong_field_type_names_the_cast() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let id = app.create_club("Chess", &token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}"),
            Some(json!({ "cost": "abc" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        "Club validation failed: cost: Cast to Number failed for value \"abc\" at path \"cost\""
    );
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let app = TestApp::new();
    let owner = app.token("owner-1");
    let intruder = app.token("intruder");
    let id = app.create_club("Chess", &owner).await;

    let patch = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}"),
            Some(json!({ "name": "Hijacked" })),
            Some(&intruder),
        )
        .await;
    assert_eq!(patch.status, StatusCode::FORBIDDEN);
    assert_eq!(patch.error(), "Can not update a club you do not own.");

    let delete = app
        .request("DELETE", &format!("/api/clubs/{id}"), None, Some(&intruder))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let club = app
        .request("GET", &format!("/api/clubs/{id}"), None, None)
        .await;
    assert_eq!(club.status, StatusCode::OK);
    assert_eq!(club.body["name"], "Chess");
}

#[tokio::test]
async fn test_update_revalidates_merged_document() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let id = app.create_club("Chess", &token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}"),
            Some(json!({ "cost": -5 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("Club cost can not be negative."));
}

#[tokio::test]
async fn test_club_events_and_cascading_delete() {
    let app = TestApp::new();
    let token = app.token("owner-1");
    let club = app.create_club("Chess", &token).await;
    let board = app.create_board("Campus", &token).await;
    let first = app.create_event("Blitz night", &board, Some(&club)).await;
    let second = app.create_event("Open play", &board, Some(&club)).await;
    let unrelated = app.create_event("Bake sale", &board, None).await;

    let events = app
        .request("GET", &format!("/api/clubs/{club}/events"), None, None)
        .await;
    assert_eq!(events.status, StatusCode::OK);
    assert_eq!(events.body.as_array().map(Vec::len), Some(2));

    let response = app
        .request("DELETE", &format!("/api/clubs/{club}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_id"], club.as_str());

    for id in [&first, &second] {
        let gone = app
            .request("GET", &format!("/api/events/{id}"), None, None)
            .await;
        assert_eq!(gone.status, StatusCode::NOT_FOUND);
    }
    assert_eq!(app.board_events(&board).await, vec![unrelated]);

    let club_after = app
        .request("GET", &format!("/api/clubs/{club}"), None, None)
        .await;
    assert_eq!(club_after.status, StatusCode::NOT_FOUND);
}
