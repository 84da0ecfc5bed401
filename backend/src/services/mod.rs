//! Data-access services for the Inventory Management backend

pub mod catalog;
pub mod dashboard;
pub mod ledger;
pub mod reorder;

pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use reorder::ReorderService;
