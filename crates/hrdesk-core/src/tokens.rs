//! Bearer token types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token issued by the backend on sign-in.
///
/// The client never parses or validates the token; it is only attached to
/// requests and compared for presence.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing authorization headers or persisting the
    /// session.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

/// Successful sign-in response.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessGrant {
    /// The bearer token for subsequent requests.
    pub access_token: AuthToken,
    /// Token scheme reported by the backend (normally `bearer`).
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
