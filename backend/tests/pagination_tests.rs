//! Table pagination tests
//!
//! Tests for the page request rules including:
//! - Window validation (negative bounds rejected)
//! - Limit capping
//! - View label resolution

use proptest::prelude::*;
use shared::{validate_page_window, PageWindow, TableView, DEFAULT_PAGE_SIZE};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_valid() {
        assert!(validate_page_window(0, 0).is_ok());
    }

    #[test]
    fn test_rejected_bound_is_named() {
        assert_eq!(validate_page_window(-10, 10).unwrap_err().field, "offset");
        assert_eq!(validate_page_window(10, -10).unwrap_err().field, "limit");
    }

    #[test]
    fn test_capping_keeps_small_limits() {
        assert_eq!(PageWindow::new(20, 10).capped(100), PageWindow::new(20, 10));
        assert_eq!(PageWindow::new(20, 1_000).capped(100), PageWindow::new(20, 100));
    }

    #[test]
    fn test_view_labels_match_front_end() {
        let labels: Vec<&str> = TableView::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Suppliers Contact Details",
                "Products with Supplier and Stock",
                "Products Needing Reorder",
            ]
        );
    }

    #[test]
    fn test_default_window_is_first_ten() {
        assert_eq!(PageWindow::default(), PageWindow::new(0, DEFAULT_PAGE_SIZE));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Capping never raises the limit and never moves the offset
        #[test]
        fn prop_capped_window(offset in 0i64..10_000, limit in 0i64..10_000, max in 1i64..500) {
            let capped = PageWindow::new(offset, limit).capped(max);
            prop_assert_eq!(capped.offset, offset);
            prop_assert!(capped.limit <= max);
            prop_assert_eq!(capped.limit, limit.min(max));
        }

        /// A capped window built from valid bounds is still valid
        #[test]
        fn prop_capping_preserves_validity(offset in 0i64..10_000, limit in 0i64..10_000, max in 1i64..500) {
            let capped = PageWindow::new(offset, limit).capped(max);
            prop_assert!(validate_page_window(capped.offset, capped.limit).is_ok());
        }

        /// Any negative bound is rejected, any non-negative pair accepted
        #[test]
        fn prop_window_validation(offset in -1_000i64..1_000, limit in -1_000i64..1_000) {
            let valid = validate_page_window(offset, limit).is_ok();
            prop_assert_eq!(valid, offset >= 0 && limit >= 0);
        }

        /// Labels resolve exactly; any other string is an unknown view
        #[test]
        fn prop_only_known_labels_resolve(label in "[A-Za-z ]{0,40}") {
            let resolved = TableView::from_label(&label);
            let known = TableView::ALL.iter().any(|v| v.label() == label);
            prop_assert_eq!(resolved.is_some(), known);
        }
    }
}
