//! hrdesk-core - Core types, traits and session management for the hrdesk HR client.
//!
//! All authenticated operations flow through a [`SessionManager`], which owns
//! the current user and bearer token and is the single source of truth for
//! access decisions made by the [`access`] module.
//!
//! # Example
//!
//! ```no_run
//! use hrdesk_core::{AuthApi, Credentials, MemoryStore, SessionManager};
//!
//! # async fn example<A: AuthApi>(api: A) -> Result<(), hrdesk_core::Error> {
//! let mut session = SessionManager::new(api, MemoryStore::new());
//! session.restore().await;
//!
//! if !session.is_authenticated() {
//!     let user = session
//!         .login(Credentials::new("hr@example.com", "secret"))
//!         .await?;
//!     println!("Logged in as {} ({})", user.username, user.role);
//! }
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod credentials;
pub mod error;
pub mod session;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::{Credentials, Registration};
pub use error::{AuthError, Error};
pub use session::{SessionManager, SessionState};
pub use store::MemoryStore;
pub use tokens::{AccessGrant, AuthToken};
pub use traits::{AuthApi, HrApi, PersistedSession, SessionStore};
pub use types::{
    ApiUrl, AssistantAnswer, Document, Employee, EmployeeUpdate, NewEmployee, Payslip, Role,
    Upload, UploadedDocument, User,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
