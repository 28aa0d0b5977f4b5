/// Common test utilities and fixtures
use analysis_service::{create_router, state::AppState, EmailClassifier, UserProcessor};
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use userhub_directory_client::{ClientConfig, DirectoryClient};

/// Analysis router pointed at `directory_url`
pub fn create_test_app(directory_url: &str) -> Router {
    create_test_app_with_timeout(directory_url, Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn create_test_app_with_timeout(directory_url: &str, timeout: Duration) -> Router {
    let client =
        DirectoryClient::new(ClientConfig::new(directory_url).with_timeout(timeout)).unwrap();
    let processor = UserProcessor::new(client, EmailClassifier::default());
    create_router(AppState::new(Arc::new(processor)))
}

/// POST /process/user/{id}
pub async fn process(app: &Router, id: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/process/user/{id}"))
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Address with nothing listening on it
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
