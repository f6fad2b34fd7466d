//! Domain types exchanged with the HR backend.
//!
//! Validated types ([`ApiUrl`], [`Role`]) enforce their invariants at
//! construction time; the record types mirror the backend's JSON.

mod api_url;
mod assistant;
mod document;
mod employee;
mod payslip;
mod user;

pub use api_url::ApiUrl;
pub use assistant::AssistantAnswer;
pub use document::{Document, Upload, UploadedDocument};
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use payslip::Payslip;
pub use user::{Role, User};
