//! Per-invocation session and access checks.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use tracing::debug;

use hrdesk_core::access::{self, AccessDecision};
use hrdesk_core::{ApiUrl, AuthToken, SessionManager, User};
use hrdesk_file::FileStore;
use hrdesk_http::HttpApi;

use crate::cli::Settings;

/// The user and token a granted command acts with.
pub struct Grant {
    pub user: User,
    pub token: AuthToken,
}

/// A restored session bound to the configured backend.
pub struct AppContext {
    session: SessionManager<HttpApi, FileStore>,
}

impl AppContext {
    /// Build the backend client and restore the saved session.
    pub async fn open(settings: &Settings) -> Result<Self> {
        let url = ApiUrl::new(&settings.api_url).context("Invalid API URL")?;
        let api = match settings.timeout {
            Some(secs) => HttpApi::with_timeout(url, Duration::from_secs(secs)),
            None => HttpApi::new(url),
        }
        .context("Failed to create HTTP client")?;

        let path = match &settings.session_file {
            Some(path) => path.clone(),
            None => default_session_path()?,
        };
        debug!(path = %path.display(), "Using session file");

        let mut session = SessionManager::new(api, FileStore::new(path));
        session.restore().await;

        Ok(Self { session })
    }

    pub fn session(&self) -> &SessionManager<HttpApi, FileStore> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager<HttpApi, FileStore> {
        &mut self.session
    }

    pub fn api(&self) -> &HttpApi {
        self.session.api()
    }

    /// Check that the session may use the route at `path`.
    pub fn require(&self, path: &str) -> Result<Grant> {
        let route = access::route_for(path).with_context(|| format!("Unknown route {}", path))?;

        match access::authorize(self.session.state(), route) {
            AccessDecision::Granted => {}
            AccessDecision::Pending => bail!("Session is still being restored"),
            AccessDecision::Unauthenticated => {
                bail!("No active session. Run 'hrdesk auth login' first.")
            }
            AccessDecision::Forbidden => {
                let role = self.session.user().map(|u| u.role.as_str()).unwrap_or("?");
                bail!(
                    "The {} role may not use {}. Go back to {}.",
                    role,
                    route.label,
                    access::LANDING_ROUTE
                );
            }
        }

        match (self.session.user(), self.session.token()) {
            (Some(user), Some(token)) => Ok(Grant {
                user: user.clone(),
                token: token.clone(),
            }),
            _ => bail!("No active session. Run 'hrdesk auth login' first."),
        }
    }

    /// Convert a backend result, ending the session if the token was rejected.
    pub fn settle<T>(&mut self, result: hrdesk_core::Result<T>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if self.session.expire_if_rejected(&err) => {
                Err(err).context("Session expired. Run 'hrdesk auth login' again.")
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Default session file inside the user's data directory.
fn default_session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "hrdesk").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join("session.json"))
}
