/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type returned by every client operation

use crate::presentation::server::ServerError;
use reqwest::StatusCode;
use std::fmt;

/// Errors produced while building, executing or decoding an API call
#[derive(Debug)]
pub enum AppError {
    /// Transport failure (connection refused, DNS, timeout, ...)
    Network(reqwest::Error),
    /// I/O failure
    Io(std::io::Error),
    /// The server answered 404
    NotFound,
    /// The server answered with a status >= 300 and a structured error body
    Server {
        /// HTTP status of the response
        status: StatusCode,
        /// Error decoded from the body
        error: ServerError,
    },
    /// The server answered with a status >= 300 but the error body could not be decoded
    MalformedErrorBody {
        /// HTTP status of the response
        status: StatusCode,
        /// Decoder message
        message: String,
    },
    /// A successful response did not match the expected schema
    Deserialization(String),
    /// An outgoing payload could not be serialized
    SerializationError(String),
    /// Tabular data could not be read
    Csv(csv::Error),
    /// The call arguments could not be turned into a request
    InvalidInput(String),
    /// A client-side project lookup found no match
    ProjectNotFound {
        /// Field that was searched
        field: &'static str,
        /// Value that was searched for
        value: String,
    },
}

impl AppError {
    /// Whether the error comes from a connect or read/write timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Network(e) if e.is_timeout())
    }

    /// HTTP status attached to the error, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Server { status, .. } | AppError::MalformedErrorBody { status, .. } => {
                Some(*status)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::NotFound => write!(f, "does not exist"),
            AppError::Server { status, error } => write!(f, "server error ({status}): {error}"),
            AppError::MalformedErrorBody { status, message } => {
                write!(f, "malformed error body ({status}): {message}")
            }
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::Csv(e) => write!(f, "csv error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::ProjectNotFound { field, value } => {
                write!(f, "project with {field} '{value}' not found")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Server { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Csv(e)
    }
}
