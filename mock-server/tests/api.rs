use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, RecordedRequest, PRIVATE_BODY, TEST_BODY};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- test.json ---

#[tokio::test]
async fn test_json_returns_fixed_body() {
    let app = app();
    let resp = app.oneshot(get_request("/test.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, TEST_BODY);
}

// --- private/test.json ---

#[tokio::test]
async fn private_without_cookie_returns_401() {
    let app = app();
    let resp = app
        .oneshot(get_request("/private/test.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, "unauthorized");
}

#[tokio::test]
async fn private_with_cookie_returns_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/private/test.json")
                .header("cookie", "session=abc123")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, PRIVATE_BODY);
}

// --- requests ---

#[tokio::test]
async fn requests_starts_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/requests")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: Vec<RecordedRequest> = body_json(resp).await;
    assert!(recorded.is_empty());
}

#[tokio::test]
async fn requests_records_path_and_headers() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/test.json")
                .header("x-blah-blah", "this is a custom header")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/requests")).await.unwrap();
    let recorded: Vec<RecordedRequest> = body_json(resp).await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].path, "/test.json");
    assert_eq!(
        recorded[0].header("x-blah-blah"),
        Some("this is a custom header")
    );
}

#[tokio::test]
async fn inspection_route_is_not_recorded() {
    let app = app();
    let resp = app.clone().oneshot(get_request("/requests")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/requests")).await.unwrap();
    let recorded: Vec<RecordedRequest> = body_json(resp).await;
    assert!(recorded.is_empty());
}

// --- unknown route ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = app();
    let resp = app.oneshot(get_request("/nope.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
