//! Dashboard figures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures shown on the dashboard, keyed by their display label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(rename = "Total Suppliers")]
    pub total_suppliers: i64,

    #[serde(rename = "Total Products")]
    pub total_products: i64,

    #[serde(rename = "Total Categories Dealing")]
    pub total_categories: i64,

    /// Sale value over the six months ending at the latest ledger entry
    #[serde(rename = "Total Sale Value (Last 6 Months)", with = "rust_decimal::serde::float")]
    pub sale_value_6m: Decimal,

    /// Restock value over the same window
    #[serde(rename = "Total Restock Value (Last 6 Months)", with = "rust_decimal::serde::float")]
    pub restock_value_6m: Decimal,

    /// Products under their reorder level with no open reorder
    #[serde(rename = "Below Reorder & No Pending Reorders")]
    pub below_reorder_unordered: i64,
}

/// `{"basic_info": {...}}` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfoResponse {
    pub basic_info: BasicInfo,
}

/// Length of the trailing value window, anchored to the latest ledger entry
pub const VALUE_WINDOW_MONTHS: i32 = 6;
