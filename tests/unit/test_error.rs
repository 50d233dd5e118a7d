use reqwest::StatusCode;
use std::error::Error;
use tableau_client::error::AppError;
use tableau_client::presentation::ServerError;

fn server_error() -> ServerError {
    ServerError {
        code: "401002".to_string(),
        summary: "Unauthorized Access".to_string(),
        detail: "Invalid authentication credentials were provided.".to_string(),
    }
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "does not exist");
}

#[test]
fn test_app_error_display_server() {
    let error = AppError::Server {
        status: StatusCode::UNAUTHORIZED,
        error: server_error(),
    };
    assert_eq!(
        error.to_string(),
        "server error (401 Unauthorized): Unauthorized Access (401002): Invalid authentication credentials were provided."
    );
}

#[test]
fn test_app_error_display_malformed_error_body() {
    let error = AppError::MalformedErrorBody {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "unexpected end of input".to_string(),
    };
    assert!(error.to_string().starts_with("malformed error body (500"));
    assert!(error.to_string().contains("unexpected end of input"));
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::SerializationError("Invalid format".to_string());
    assert_eq!(error.to_string(), "serialization error: Invalid format");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("missing field `credentials`".to_string());
    assert_eq!(
        error.to_string(),
        "deserialization error: missing field `credentials`"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad url".to_string());
    assert_eq!(error.to_string(), "invalid input: bad url");
}

#[test]
fn test_app_error_display_project_not_found() {
    let error = AppError::ProjectNotFound {
        field: "name",
        value: "Finance".to_string(),
    };
    assert_eq!(error.to_string(), "project with name 'Finance' not found");
}

#[test]
fn test_app_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error = AppError::from(io);
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: pipe closed");
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_status() {
    assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));

    let server = AppError::Server {
        status: StatusCode::FORBIDDEN,
        error: server_error(),
    };
    assert_eq!(server.status(), Some(StatusCode::FORBIDDEN));

    let malformed = AppError::MalformedErrorBody {
        status: StatusCode::BAD_GATEWAY,
        message: String::new(),
    };
    assert_eq!(malformed.status(), Some(StatusCode::BAD_GATEWAY));

    assert_eq!(AppError::InvalidInput("x".to_string()).status(), None);
}

#[test]
fn test_app_error_server_source_is_server_error() {
    let error = AppError::Server {
        status: StatusCode::BAD_REQUEST,
        error: server_error(),
    };
    let source = error.source().expect("source");
    assert!(source.to_string().contains("401002"));
}

#[test]
fn test_app_error_is_timeout_false_for_non_network() {
    assert!(!AppError::NotFound.is_timeout());
    assert!(!AppError::Deserialization("x".to_string()).is_timeout());
}
