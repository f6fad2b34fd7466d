//! In-memory session store.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{PersistedSession, SessionStore};
use crate::types::User;
use crate::{AuthToken, Result};

/// A [`SessionStore`] kept in process memory.
///
/// Clones share the same contents, so a caller can keep a handle to inspect
/// what the session manager persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<PersistedSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a persisted session.
    pub fn with_contents(contents: PersistedSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(contents)),
        }
    }

    /// Snapshot of the current contents.
    pub fn contents(&self) -> PersistedSession {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PersistedSession> {
        // The guarded value is replaced wholesale, so a poisoned lock still
        // holds a consistent session.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<PersistedSession> {
        Ok(self.contents())
    }

    fn save(&self, token: &AuthToken, user: &User) -> Result<()> {
        *self.lock() = PersistedSession {
            token: Some(token.clone()),
            user: Some(user.clone()),
        };
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = PersistedSession::default();
        Ok(())
    }
}
