//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use clubhub_api::AppState;
use clubhub_auth::JwtEncoder;
use clubhub_core::config::{AppConfig, DatabaseProvider};
use clubhub_database::{MemoryStore, Stores};

const TEST_SECRET: &str = "integration-test-secret";
const BOUNDARY: &str = "clubhub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: Arc<MemoryStore>,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application on an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let store = Arc::new(MemoryStore::new());
        let encoder = JwtEncoder::new(&config.auth);
        let state = AppState::new(config, Stores::memory(Arc::clone(&store)));

        Self {
            router: clubhub_api::build_app(state),
            store,
            encoder,
        }
    }

    /// Bearer token identifying `user`
    pub fn token(&self, user: &str) -> String {
        self.encoder
            .issue(user, chrono::Duration::hours(1))
            .expect("Failed to issue token")
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST a multipart form. `file` is `(field, file name, bytes)`.
    pub async fn multipart(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
        token: &str,
    ) -> TestResponse {
        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((name, file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a board owned by `token`'s caller and return its id
    pub async fn create_board(&self, name: &str, token: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/boards",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create a club owned by `token`'s caller and return its id
    pub async fn create_club(&self, name: &str, token: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/clubs",
                Some(club_body(name)),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Post an event to `board` and return its id
    pub async fn create_event(&self, title: &str, board: &str, club: Option<&str>) -> String {
        let mut body = event_body(title, board);
        if let Some(club) = club {
            body["belongsToClub"] = Value::String(club.to_string());
        }
        let response = self.request("POST", "/api/events", Some(body), None).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Event ids currently listed on a board
    pub async fn board_events(&self, board: &str) -> Vec<String> {
        let response = self
            .request("GET", &format!("/api/boards/{board}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        string_list(&response.body["events"])
    }
}

/// A club payload carrying only the required fields
pub fn club_body(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "overview": "We meet on Thursdays.",
        "description": "A friendly group for anyone curious.",
        "genre": "Academic",
    })
}

/// A minimal valid event payload
pub fn event_body(title: &str, board: &str) -> Value {
    serde_json::json!({
        "title": title,
        "description": "Open to everyone.",
        "date": "2026-11-05T18:00:00Z",
        "belongsToBoard": board,
    })
}

pub fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `_id` of the returned document
    pub fn id(&self) -> String {
        self.body["_id"]
            .as_str()
            .expect("No _id in response")
            .to_string()
    }

    /// The `error` message of a failed request
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
