//! Session management for authenticated operations.
//!
//! The [`SessionManager`] is the single authority for who is logged in and
//! with what token. It is an explicit object handed to whatever needs it,
//! not ambient global state.

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::SessionState;
