//! Budget Service and Category Service client for Budgetlens.
//!
//! This crate provides:
//! - The `BudgetSource` collaborator trait
//! - A `reqwest`-backed implementation
//! - Response decoding with boundary validation of budget records

pub mod decode;
pub mod error;
pub mod http;
pub mod source;

pub use error::ClientError;
pub use http::HttpBudgetClient;
pub use source::BudgetSource;
