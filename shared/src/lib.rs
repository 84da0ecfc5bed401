//! Shared types and models for the Inventory Management backend
//!
//! Domain vocabulary without I/O: reorder and stock enums, the named table
//! views, page windows, request payloads and their validation.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
