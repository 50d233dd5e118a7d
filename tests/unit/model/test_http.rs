use reqwest::{Method, StatusCode};
use std::time::Duration;
use tableau_client::error::AppError;
use tableau_client::model::http::{ApiRequest, Timeouts, check_status};

const ERROR_BODY: &str = r#"<tsResponse xmlns="http://tableau.com/api">
  <error code="401002">
    <summary>Unauthorized Access</summary>
    <detail>Invalid authentication credentials were provided.</detail>
  </error>
</tsResponse>"#;

#[test]
fn test_check_status_success() {
    assert!(check_status(StatusCode::OK, b"").is_ok());
    assert!(check_status(StatusCode::CREATED, b"<tsResponse/>").is_ok());
    assert!(check_status(StatusCode::NO_CONTENT, b"").is_ok());
}

#[test]
fn test_check_status_not_found_ignores_body() {
    assert!(matches!(
        check_status(StatusCode::NOT_FOUND, b""),
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        check_status(StatusCode::NOT_FOUND, ERROR_BODY.as_bytes()),
        Err(AppError::NotFound)
    ));
}

#[test]
fn test_check_status_server_error_body() {
    match check_status(StatusCode::UNAUTHORIZED, ERROR_BODY.as_bytes()) {
        Err(AppError::Server { status, error }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(error.code, "401002");
            assert_eq!(error.summary, "Unauthorized Access");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_check_status_redirect_is_an_error() {
    let result = check_status(StatusCode::MOVED_PERMANENTLY, b"");
    assert_eq!(
        result.unwrap_err().status(),
        Some(StatusCode::MOVED_PERMANENTLY)
    );
}

#[test]
fn test_check_status_malformed_body_keeps_status() {
    match check_status(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>") {
        Err(AppError::MalformedErrorBody { status, .. }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_check_status_empty_error_body_is_malformed() {
    assert!(matches!(
        check_status(StatusCode::BAD_REQUEST, b""),
        Err(AppError::MalformedErrorBody { .. })
    ));
}

#[test]
fn test_api_request_builder() {
    let request = ApiRequest::post("https://tableau.example.com/api/2.8/auth/signin")
        .with_header("Content-Type", "application/xml")
        .with_body("<tsRequest/>")
        .with_timeouts(Timeouts::export());

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.body.as_deref(), Some(&b"<tsRequest/>"[..]));
    assert_eq!(request.timeouts, Some(Timeouts::export()));
}

#[test]
fn test_api_request_defaults() {
    let request = ApiRequest::get("https://tableau.example.com/api/2.8/sites/");
    assert_eq!(request.method, Method::GET);
    assert!(request.headers.is_empty());
    assert!(request.body.is_none());
    assert!(request.timeouts.is_none());
    assert_eq!(ApiRequest::delete("u").method, Method::DELETE);
}

#[test]
fn test_export_timeouts() {
    let timeouts = Timeouts::export();
    assert_eq!(timeouts.connect, Duration::from_secs(60));
    assert_eq!(timeouts.read_write, Duration::from_secs(60));
}
