//! Command implementations, one module per command group.

pub mod assistant;
pub mod auth;
pub mod documents;
pub mod employees;
pub mod payslips;
