//! HTTP handlers for the Inventory Management API

pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod reorder;

pub use catalog::*;
pub use dashboard::*;
pub use health::*;
pub use reorder::*;
