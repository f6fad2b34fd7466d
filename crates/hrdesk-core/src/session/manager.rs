//! The session manager.

use tracing::{debug, info, instrument, warn};

use crate::traits::{AuthApi, SessionStore};
use crate::types::User;
use crate::{AuthToken, Credentials, Error, Registration, Result};

use super::SessionState;

/// Owns the current user and bearer token.
///
/// The manager starts in [`SessionState::Initializing`] and is expected to be
/// [restored](SessionManager::restore) once before any access decision is
/// made. Mutating operations take `&mut self`, so overlapping `login` and
/// `restore` calls on one manager cannot be expressed.
///
/// The persisted store is a cache: it is read once on restore and written on
/// every mutation.
///
/// # Example
///
/// ```no_run
/// use hrdesk_core::{AuthApi, Credentials, MemoryStore, SessionManager};
///
/// # async fn example<A: AuthApi>(api: A) -> Result<(), hrdesk_core::Error> {
/// let mut session = SessionManager::new(api, MemoryStore::new());
/// session.restore().await;
/// assert!(!session.is_loading());
///
/// session.login(Credentials::new("hr@x.com", "secret")).await?;
/// session.logout()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state: SessionState,
}

impl<A, S> SessionManager<A, S>
where
    A: AuthApi,
    S: SessionStore,
{
    /// Create a manager in the initializing state.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: SessionState::Initializing,
        }
    }

    /// Returns the API the manager authenticates against.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the persisted store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.state.token()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Re-establish the session from the persisted token.
    ///
    /// The token is checked by resolving its user. Any failure, whether the
    /// token was rejected or the backend was unreachable, clears the
    /// persisted and in-memory session. Errors are logged, never returned.
    ///
    /// Only the first call has an effect; later calls return the current
    /// state untouched.
    #[instrument(skip(self))]
    pub async fn restore(&mut self) -> &SessionState {
        if !self.state.is_loading() {
            debug!("Session already resolved, skipping restore");
            return &self.state;
        }

        let persisted = match self.store.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session");
                self.discard_persisted();
                self.state = SessionState::Unauthenticated;
                return &self.state;
            }
        };

        let Some(token) = persisted.token else {
            if persisted.user.is_some() {
                debug!("Discarding persisted user without a token");
                self.discard_persisted();
            }
            debug!("No persisted session");
            self.state = SessionState::Unauthenticated;
            return &self.state;
        };

        match self.api.fetch_current_user(&token).await {
            Ok(user) => {
                if let Err(e) = self.store.save(&token, &user) {
                    warn!(error = %e, "Failed to re-persist restored user");
                }
                info!(username = %user.username, role = %user.role, "Session restored");
                self.state = SessionState::Authenticated { user, token };
            }
            Err(e) => {
                warn!(error = %e, "Persisted token rejected, clearing session");
                self.discard_persisted();
                self.state = SessionState::Unauthenticated;
            }
        }

        &self.state
    }

    /// Sign in and resolve the user the new token belongs to.
    ///
    /// Nothing is committed until the token, the user and the persisted copy
    /// are all in hand. On error the in-memory session and the store are left
    /// exactly as they were.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&mut self, credentials: Credentials) -> Result<User> {
        info!("Signing in");

        let grant = self.api.sign_in(&credentials).await?;
        let token = grant.access_token;

        let user = self.api.fetch_current_user(&token).await?;

        self.store.save(&token, &user)?;

        debug!(username = %user.username, role = %user.role, "Signed in");
        self.state = SessionState::Authenticated {
            user: user.clone(),
            token,
        };

        Ok(user)
    }

    /// Register an account.
    ///
    /// No session is established; the caller logs in separately.
    #[instrument(
        skip(self, registration),
        fields(username = %registration.username(), role = %registration.role())
    )]
    pub async fn signup(&self, registration: Registration) -> Result<User> {
        info!("Registering account");
        let user = self.api.sign_up(&registration).await?;
        Ok(user)
    }

    /// End the session.
    ///
    /// The in-memory session is always cleared. The error, if any, is from
    /// clearing the persisted copy. Logging out twice is the same as once.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<()> {
        if self.state.is_authenticated() {
            info!("Logging out");
        }
        self.state = SessionState::Unauthenticated;
        self.store.clear()
    }

    /// Log out if `error` shows the backend rejected the session's token.
    ///
    /// Returns true if the session was ended. There is no refresh; a fresh
    /// login is the only way back.
    pub fn expire_if_rejected(&mut self, error: &Error) -> bool {
        if !self.state.is_authenticated() || !error.is_unauthorized() {
            return false;
        }

        warn!("Token rejected by backend, ending session");
        if let Err(e) = self.logout() {
            warn!(error = %e, "Failed to clear persisted session");
        }
        true
    }

    fn discard_persisted(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
    }
}
