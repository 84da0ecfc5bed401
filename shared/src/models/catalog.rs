//! Suppliers and products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supplier reference used by the product form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub supplier_id: i64,
    pub supplier_name: String,
}

/// Product reference used by the history and reorder pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: i64,
    pub product_name: String,
}

/// Payload for adding a product to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub reorder_level: i32,
    pub supplier_id: i64,
}

impl NewProduct {
    /// Name and category with surrounding whitespace removed
    pub fn normalized(mut self) -> Self {
        self.product_name = self.product_name.trim().to_string();
        self.category = self.category.trim().to_string();
        self
    }
}

/// Plain `{"message": ...}` acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
