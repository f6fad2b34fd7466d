//! hrdesk-http - REST client for the HR backend.

mod api;
mod client;
mod endpoints;

pub use api::HttpApi;
