/// Processing API tests
/// Runs the analysis router against a mocked directory service
mod common;

use axum::http::StatusCode;
use common::{closed_port_url, create_test_app, create_test_app_with_timeout, json_body, process};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn directory_returning(user_path: &str, template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

/// Test the full report for a two-part name on a public domain
#[tokio::test]
async fn test_process_user_data() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Ahmed Aly",
            "email": "Ahmed@gmail.com"
        })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = json_body(response).await;
    assert_eq!(
        data,
        json!({
            "user_id": "1",
            "name": "Ahmed Aly",
            "email": "Ahmed@gmail.com",
            "email_domain": "gmail.com",
            "name_analysis": {
                "first_name": "Ahmed",
                "middle_names": [],
                "last_name": "Aly",
                "total_parts": 2
            },
            "email_analysis": {
                "username": "Ahmed",
                "domain": "gmail.com",
                "is_corporate": false
            }
        })
    );
}

/// Test middle names and a corporate domain
#[tokio::test]
async fn test_process_corporate_user_with_middle_names() {
    let mock_server = directory_returning(
        "/users/7",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "7",
            "name": "Mary Ann Evans Cross",
            "email": "mary@publisher.co.uk"
        })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "7").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = json_body(response).await;
    assert_eq!(data["name_analysis"]["first_name"], "Mary");
    assert_eq!(data["name_analysis"]["middle_names"], json!(["Ann", "Evans"]));
    assert_eq!(data["name_analysis"]["last_name"], "Cross");
    assert_eq!(data["name_analysis"]["total_parts"], 4);
    assert_eq!(data["email_analysis"]["is_corporate"], true);
}

/// Test upstream 404 becomes 404
#[tokio::test]
async fn test_process_nonexistent_user() {
    let mock_server = directory_returning(
        "/users/999",
        ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let data = json_body(response).await;
    assert_eq!(data["error"], "User not found");
}

/// Test a refused connection becomes 503
#[tokio::test]
async fn test_process_directory_unreachable() {
    let app = create_test_app(&closed_port_url());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let data = json_body(response).await;
    assert!(data["error"]
        .as_str()
        .unwrap()
        .contains("Directory service connection error"));
}

/// Test a slow directory becomes 503 once the timeout fires
#[tokio::test]
async fn test_process_directory_timeout() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "id": "1", "name": "A", "email": "a@b.c" }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let app = create_test_app_with_timeout(&mock_server.uri(), Duration::from_millis(100));

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

/// Test a record missing fields becomes 502
#[tokio::test]
async fn test_process_missing_fields() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(200).set_body_json(json!({ "id": "1", "name": "No Email" })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let data = json_body(response).await;
    let error = data["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid user data from directory service"));
    assert!(error.contains("email"));
}

/// Test an email without '@' becomes 502 instead of a partial report
#[tokio::test]
async fn test_process_malformed_email() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Ahmed Aly",
            "email": "ahmed.gmail.com"
        })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let data = json_body(response).await;
    assert!(data["error"].as_str().unwrap().contains("exactly one '@'"));
}

/// Test a non-JSON body becomes 502
#[tokio::test]
async fn test_process_non_json_body() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

/// Test an upstream 500 becomes 502
#[tokio::test]
async fn test_process_upstream_server_error() {
    let mock_server = directory_returning(
        "/users/1",
        ResponseTemplate::new(500).set_body_json(json!({ "error": "Storage error" })),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    let response = process(&app, "1").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let data = json_body(response).await;
    assert!(data["error"].as_str().unwrap().contains("Storage error"));
}

/// Test GET on the processing route is not allowed
#[tokio::test]
async fn test_process_requires_post() {
    use axum::{body::Body, http::Request};
    use tower::util::ServiceExt;

    let app = create_test_app(&closed_port_url());
    let request = Request::builder()
        .uri("/process/user/1")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Test GET /health does not touch the directory
#[tokio::test]
async fn test_health() {
    use axum::{body::Body, http::Request};
    use tower::util::ServiceExt;

    let app = create_test_app(&closed_port_url());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let data = json_body(response).await;
    assert_eq!(data["service"], "analysis");
}
