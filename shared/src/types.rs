//! Common types used across the platform

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when a request does not specify one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raised when a stored or submitted label matches no known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// A window into an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Cap the limit at `max`, leaving the offset untouched
    pub fn capped(self, max: i64) -> Self {
        Self {
            offset: self.offset,
            limit: self.limit.min(max),
        }
    }
}

/// Named, paginated views over the inventory tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableView {
    /// Supplier name and contact details, ordered by supplier name
    SupplierContacts,
    /// Products joined with their supplier, ordered by product name
    ProductsWithSupplier,
    /// Products at or below their reorder level, ordered by product name
    ProductsNeedingReorder,
}

impl TableView {
    pub const ALL: [TableView; 3] = [
        TableView::SupplierContacts,
        TableView::ProductsWithSupplier,
        TableView::ProductsNeedingReorder,
    ];

    /// Label the front-end uses to address the view
    pub fn label(&self) -> &'static str {
        match self {
            TableView::SupplierContacts => "Suppliers Contact Details",
            TableView::ProductsWithSupplier => "Products with Supplier and Stock",
            TableView::ProductsNeedingReorder => "Products Needing Reorder",
        }
    }

    /// Resolve a label; labels are matched exactly
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.label() == label)
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
