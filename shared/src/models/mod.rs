//! Domain models for the Inventory Management backend

mod catalog;
mod dashboard;
mod reorder;
mod stock;

pub use catalog::*;
pub use dashboard::*;
pub use reorder::*;
pub use stock::*;
