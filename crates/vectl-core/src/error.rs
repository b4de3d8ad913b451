//! Error type and best-effort error-code classification.
//!
//! The schema compiler raises only `Error::SchemaParse`; the other
//! variants cover the surrounding CLI. `ErrorCode` gives agent-facing
//! output a stable code plus an optional hint, classified from the
//! message text when nothing better is known.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("schema parse error: {0}")]
    SchemaParse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SchemaParse(_) => ErrorCode::SchemaError,
            Self::InvalidConfig(_) => ErrorCode::ValidationError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Operation(msg) => ErrorCode::classify(msg),
        }
    }
}

/// Stable error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ConnectionError,
    ConnectionTimeout,
    AuthenticationError,
    ValidationError,
    MissingArgument,
    InvalidFormat,
    SchemaError,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    OperationFailed,
    Timeout,
    DataError,
    FileNotFound,
    UnknownError,
}

impl ErrorCode {
    /// Keyword classification of an arbitrary error message.
    ///
    /// Heuristic by design; unknown messages fall through to
    /// `UnknownError`. Order matters: connection beats timeout beats
    /// the generic buckets.
    pub fn classify(message: &str) -> Self {
        let msg = message.to_lowercase();

        if msg.contains("connection") || msg.contains("connect") {
            if msg.contains("timeout") {
                return Self::ConnectionTimeout;
            }
            return Self::ConnectionError;
        }
        if msg.contains("timeout") {
            return Self::Timeout;
        }
        if msg.contains("authentication") || msg.contains("unauthorized") || msg.contains("unauthenticated") {
            return Self::AuthenticationError;
        }
        if msg.contains("not found") || msg.contains("does not exist") || msg.contains("doesn't exist") {
            return Self::NotFound;
        }
        if msg.contains("already exist") {
            return Self::AlreadyExists;
        }
        if msg.contains("permission") || msg.contains("denied") || msg.contains("forbidden") {
            return Self::PermissionDenied;
        }
        if msg.contains("schema") || (msg.contains("field") && msg.contains("type")) {
            return Self::SchemaError;
        }
        if msg.contains("invalid") || msg.contains("validation") {
            return Self::ValidationError;
        }
        if msg.contains("required") || msg.contains("missing") {
            return Self::MissingArgument;
        }
        Self::UnknownError
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::ConnectionTimeout => "CONNECTION_TIMEOUT",
            Self::AuthenticationError => "AUTHENTICATION_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MissingArgument => "MISSING_ARGUMENT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::SchemaError => "SCHEMA_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::OperationFailed => "OPERATION_FAILED",
            Self::Timeout => "TIMEOUT",
            Self::DataError => "DATA_ERROR",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConnectionError => Some("Check if the server is running and the URI is correct"),
            Self::ConnectionTimeout => Some("Increase the timeout or check the network"),
            Self::AuthenticationError => Some("Verify the token configured for this profile"),
            Self::NotFound => Some("List collections to see what exists on the server"),
            Self::AlreadyExists => Some("Use a different name or drop the existing resource first"),
            Self::FileNotFound => Some("Check that the file path is correct and the file exists"),
            Self::MissingArgument => Some("Run the command with --help to see required arguments"),
            Self::InvalidFormat => Some("Check that the JSON syntax is valid"),
            Self::SchemaError => Some("Check the field definition syntax: name:type[:modifier]"),
            Self::PermissionDenied => Some("Check the permissions granted to the current user"),
            _ => None,
        }
    }
}
