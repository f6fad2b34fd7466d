//! hrdesk-file - Filesystem-backed session persistence.
//!
//! [`FileStore`] keeps the token and user in one JSON document so they are
//! always written and removed together.

mod store;

pub use store::FileStore;
