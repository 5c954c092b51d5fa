use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Body served for `GET /test.json`.
pub const TEST_BODY: &str = r#"{"greeting":"hello"}"#;

/// Body served for `GET /private/test.json` when a cookie is present.
pub const PRIVATE_BODY: &str = r#"{"secret":"s3cret"}"#;

/// One request as the server saw it: path plus wire-level headers
/// (names lowercased by the HTTP layer).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub type Recorded = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    let recorded: Recorded = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/test.json", get(test_json))
        .route("/private/test.json", get(private_test_json))
        .route("/requests", get(list_requests))
        .with_state(recorded)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn record(recorded: &Recorded, path: &str, headers: &HeaderMap) {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    recorded.write().await.push(RecordedRequest {
        path: path.to_string(),
        headers,
    });
}

async fn test_json(State(recorded): State<Recorded>, headers: HeaderMap) -> &'static str {
    record(&recorded, "/test.json", &headers).await;
    TEST_BODY
}

async fn private_test_json(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    record(&recorded, "/private/test.json", &headers).await;
    if headers.contains_key("cookie") {
        (StatusCode::OK, PRIVATE_BODY)
    } else {
        (StatusCode::UNAUTHORIZED, "unauthorized")
    }
}

async fn list_requests(State(recorded): State<Recorded>) -> Json<Vec<RecordedRequest>> {
    let recorded = recorded.read().await;
    Json(recorded.clone())
}
