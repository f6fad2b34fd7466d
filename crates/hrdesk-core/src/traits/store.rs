//! Persisted session state trait.

use serde::{Deserialize, Serialize};

use crate::types::User;
use crate::{AuthToken, Result};

/// The persisted copy of a session: keys `token` and `user`.
///
/// Both absent means logged out and both present means logged in. Any other
/// combination is treated as logged out on restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<AuthToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl PersistedSession {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// Local storage for the last known session.
///
/// Only the session manager writes to it. Writes are last-writer-wins.
pub trait SessionStore: Send + Sync {
    /// Read the persisted session. A store with nothing in it yields an
    /// empty [`PersistedSession`], not an error.
    fn load(&self) -> Result<PersistedSession>;

    /// Persist token and user together.
    fn save(&self, token: &AuthToken, user: &User) -> Result<()>;

    /// Remove both token and user. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}
