//! Error types for hrdesk.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, protocol, input validation and storage errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for hrdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Sign-in, sign-up or current-user failures.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Non-success responses from the backend.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, role, upload).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Persisted session state could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns true if the backend rejected the bearer token (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Protocol(err) => err.is_unauthorized(),
            Error::Auth(err) => err.is_unauthorized(),
            _ => false,
        }
    }

    /// Fill in a human-readable detail for protocol errors that carried none.
    pub fn with_fallback_detail(self, fallback: &str) -> Self {
        match self {
            Error::Protocol(mut err) if err.detail.is_none() => {
                err.detail = Some(fallback.to_string());
                Error::Protocol(err)
            }
            other => other,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication failure.
///
/// Invalid credentials, an expired or invalid token, and an unreachable
/// backend all surface as this one category. The message is what the user
/// sees; the cause is kept for diagnostics.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
    #[source]
    cause: Option<Box<Error>>,
}

impl AuthError {
    /// Create an authentication error with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap a failed call, preferring the backend's `detail` over `fallback`.
    pub fn from_failure(fallback: &str, cause: Error) -> Self {
        let message = match &cause {
            Error::Protocol(ProtocolError {
                detail: Some(detail),
                ..
            }) => detail.clone(),
            _ => fallback.to_string(),
        };

        Self {
            message,
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the underlying cause was a rejected token.
    pub fn is_unauthorized(&self) -> bool {
        self.cause.as_deref().is_some_and(Error::is_unauthorized)
    }
}

/// A non-success response from the backend.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` field of the error body, if present.
    pub detail: Option<String>,
}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Check if this is a rejected-token response.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Unknown user role.
    #[error("unknown role '{value}' (expected hr, finance or employee)")]
    Role { value: String },

    /// A file to upload could not be read.
    #[error("cannot read upload '{path}': {reason}")]
    Upload { path: String, reason: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

/// Persisted-state errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored session could not be parsed or serialized.
    #[error("malformed session data in {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
