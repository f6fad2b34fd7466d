//! Core traits for the backend API and persisted session state.

mod auth;
mod hr;
mod store;

pub use auth::AuthApi;
pub use hr::HrApi;
pub use store::{PersistedSession, SessionStore};
