/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use directory_service::{create_router, state::AppState};
use tower::util::ServiceExt;

/// Router over a fresh in-memory store
pub fn create_test_app() -> Router {
    create_router(AppState::in_memory())
}

/// Send a request with an optional JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Create a user through the API and return its JSON record
pub async fn create_user(app: &Router, name: &str, email: &str) -> serde_json::Value {
    let response = send(
        app,
        "POST",
        "/users",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(response.status(), 201);
    json_body(response).await
}

/// Test user fixtures
pub mod fixtures {
    pub const AHMED_NAME: &str = "Ahmed Aly";
    pub const AHMED_EMAIL: &str = "Ahmed@gmail.com";
}
