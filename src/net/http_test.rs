use super::*;
use serde_json::Value;

fn api_for(server: &mockito::ServerGuard) -> HttpApi {
    let config = ApiConfig::new(&server.url()).unwrap();
    HttpApi::new(&config).unwrap()
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("http://h:1/object1/", "/sync/abc"), "http://h:1/object1/sync/abc");
    assert_eq!(join_url("http://h:1/", "object1/_stat"), "http://h:1/object1/_stat");
    assert_eq!(join_url("http://h:1", "manager/nodes/"), "http://h:1/manager/nodes/");
}

#[test]
fn expect_json_rejects_error_status() {
    let raw = RawResponse { status: 404, body: "not found".into() };
    let err = expect_json::<Value>(&raw).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, body: "not found".into() });
}

#[test]
fn expect_json_parses_success_body() {
    let raw = RawResponse { status: 200, body: r#"{"total":3}"#.into() };
    let value: Value = expect_json(&raw).unwrap();
    assert_eq!(value["total"], 3);
}

#[test]
fn parse_json_reports_malformed_body() {
    assert!(matches!(parse_json::<Value>("Object schema!"), Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn get_json_sends_form_content_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/object1/_stat")
        .match_header("content-type", FORM_CONTENT_TYPE)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total":1,"memory":2}"#)
        .create_async()
        .await;

    let value: Value = api_for(&server).get_json("object1/_stat").await.unwrap();
    assert_eq!(value, serde_json::json!({ "total": 1, "memory": 2 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn send_returns_raw_status_without_judging() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/manager/nodes/")
        .with_status(400)
        .with_body(r#"{"status":400,"detail":"bad"}"#)
        .create_async()
        .await;

    let raw = api_for(&server)
        .send(Method::POST, "manager/nodes/", Some(String::new()))
        .await
        .unwrap();
    assert_eq!(raw.status, 400);
    assert!(!raw.is_success());
    assert!(raw.body.contains("bad"));
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    let config = ApiConfig::new("http://127.0.0.1:9").unwrap();
    let api = HttpApi::new(&config).unwrap();
    let err = api.get_json::<Value>("object1/_stat").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert!(err.retryable());
}
