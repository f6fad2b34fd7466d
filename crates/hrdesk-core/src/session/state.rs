//! Observable session state.

use crate::AuthToken;
use crate::types::User;

/// Where a session is in its lifecycle.
///
/// A token without a resolved user (or the reverse) cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Restore has not finished; no access decision may be taken yet.
    #[default]
    Initializing,
    /// No user is logged in.
    Unauthenticated,
    /// A user is logged in with the given token.
    Authenticated { user: User, token: AuthToken },
}

impl SessionState {
    /// True until restore has completed.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}
