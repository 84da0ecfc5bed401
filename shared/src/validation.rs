//! Validation rules for incoming inventory payloads
//!
//! These run in the backend before any statement is issued, so business-rule
//! violations surface as field errors rather than opaque database failures.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{NewProduct, PlaceReorder};

/// Largest price a NUMERIC(10,2) column can hold, exclusive
pub const PRICE_CEILING: i64 = 100_000_000;

/// A rejected field together with a human readable reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate a required text field is not blank
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be blank"));
    }
    Ok(())
}

/// Validate price is non-negative and fits the price column
pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO {
        return Err(ValidationError::new("price", "must not be negative"));
    }
    if price >= Decimal::from(PRICE_CEILING) {
        return Err(ValidationError::new("price", "exceeds the maximum supported price"));
    }
    if price.scale() > 2 && price.round_dp(2) != price {
        return Err(ValidationError::new("price", "must have at most two decimal places"));
    }
    Ok(())
}

/// Validate a stock count is non-negative
pub fn validate_non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }
    Ok(())
}

/// Validate a product payload before insertion
pub fn validate_new_product(product: &NewProduct) -> Result<(), ValidationError> {
    validate_required_text("product_name", &product.product_name)?;
    validate_required_text("category", &product.category)?;
    validate_price(product.price)?;
    validate_non_negative("stock_quantity", product.stock_quantity)?;
    validate_non_negative("reorder_level", product.reorder_level)?;
    if product.supplier_id <= 0 {
        return Err(ValidationError::new("supplier_id", "must be a positive identifier"));
    }
    Ok(())
}

// ============================================================================
// Reorder Validations
// ============================================================================

/// Validate a reorder payload before insertion
pub fn validate_place_reorder(reorder: &PlaceReorder) -> Result<(), ValidationError> {
    if reorder.product_id <= 0 {
        return Err(ValidationError::new("product_id", "must be a positive identifier"));
    }
    if reorder.reorder_quantity <= 0 {
        return Err(ValidationError::new("reorder_quantity", "must be positive"));
    }
    Ok(())
}

// ============================================================================
// Pagination Validations
// ============================================================================

/// Validate offset and limit of a table page request
pub fn validate_page_window(offset: i64, limit: i64) -> Result<(), ValidationError> {
    if offset < 0 {
        return Err(ValidationError::new("offset", "must not be negative"));
    }
    if limit < 0 {
        return Err(ValidationError::new("limit", "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product() -> NewProduct {
        NewProduct {
            product_name: "Arabica Beans 1kg".to_string(),
            category: "Coffee".to_string(),
            price: Decimal::from_str("12.50").unwrap(),
            stock_quantity: 40,
            reorder_level: 10,
            supplier_id: 1,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_new_product(&product()).is_ok());
    }

    #[test]
    fn test_zero_values_are_accepted() {
        let p = NewProduct {
            price: Decimal::ZERO,
            stock_quantity: 0,
            reorder_level: 0,
            ..product()
        };
        assert!(validate_new_product(&p).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let p = NewProduct {
            product_name: "   ".to_string(),
            ..product()
        };
        assert_eq!(validate_new_product(&p).unwrap_err().field, "product_name");
    }

    #[test]
    fn test_negative_price_rejected() {
        let p = NewProduct {
            price: Decimal::from_str("-0.01").unwrap(),
            ..product()
        };
        assert_eq!(validate_new_product(&p).unwrap_err().field, "price");
    }

    #[test]
    fn test_price_precision() {
        assert!(validate_price(Decimal::from_str("9.999").unwrap()).is_err());
        assert!(validate_price(Decimal::from_str("9.990").unwrap()).is_ok());
        assert!(validate_price(Decimal::from(PRICE_CEILING)).is_err());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let p = NewProduct {
            stock_quantity: -1,
            ..product()
        };
        let err = validate_new_product(&p).unwrap_err();
        assert_eq!(err.to_string(), "stock_quantity: must not be negative");
    }

    #[test]
    fn test_reorder_quantity_must_be_positive() {
        let ok = PlaceReorder {
            product_id: 3,
            reorder_quantity: 25,
        };
        assert!(validate_place_reorder(&ok).is_ok());

        let zero = PlaceReorder {
            reorder_quantity: 0,
            ..ok.clone()
        };
        assert_eq!(validate_place_reorder(&zero).unwrap_err().field, "reorder_quantity");
    }

    #[test]
    fn test_page_window_bounds() {
        assert!(validate_page_window(0, 10).is_ok());
        assert!(validate_page_window(0, 0).is_ok());
        assert_eq!(validate_page_window(-1, 10).unwrap_err().field, "offset");
        assert_eq!(validate_page_window(0, -5).unwrap_err().field, "limit");
    }
}
