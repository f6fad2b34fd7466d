//! Authentication API trait.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::types::User;
use crate::{AccessGrant, AuthToken, Credentials, Registration};

/// The backend calls the session manager depends on.
///
/// Each call is a single request with one outcome: no retry, caching or
/// batching happens behind this trait.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AccessGrant, AuthError>;

    /// Register a new account. Does not establish a session.
    async fn sign_up(&self, registration: &Registration) -> Result<User, AuthError>;

    /// Resolve the user a token belongs to.
    async fn fetch_current_user(&self, token: &AuthToken) -> Result<User, AuthError>;
}
