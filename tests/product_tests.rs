//! Product creation tests
//!
//! Covers the request validation contract: required-field reporting, SKU
//! format rules, defaulting, and exact fixed-point price handling.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[derive(Debug, Default)]
struct CreateProductRequest {
    name: Option<String>,
    sku: Option<String>,
    price: Option<Decimal>,
    warehouse_id: Option<i64>,
    company_id: Option<i64>,
    product_type_id: Option<i64>,
    initial_quantity: Option<i32>,
}

fn missing_fields(req: &CreateProductRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if req.name.is_none() {
        missing.push("name");
    }
    if req.sku.is_none() {
        missing.push("sku");
    }
    if req.price.is_none() {
        missing.push("price");
    }
    if req.warehouse_id.is_none() {
        missing.push("warehouse_id");
    }
    missing
}

fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.is_empty() {
        return Err("SKU must not be empty");
    }
    if sku.len() > 50 {
        return Err("SKU must be at most 50 characters");
    }
    if sku.chars().any(|c| c.is_whitespace()) {
        return Err("SKU must not contain whitespace");
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_complete_request_has_no_missing_fields() {
        let req = CreateProductRequest {
            name: Some("Widget A".to_string()),
            sku: Some("SKU-001".to_string()),
            price: Some(dec("19.99")),
            warehouse_id: Some(1),
            ..Default::default()
        };
        assert!(missing_fields(&req).is_empty());
    }

    #[test]
    fn test_empty_request_reports_all_required_fields() {
        let req = CreateProductRequest::default();
        assert_eq!(
            missing_fields(&req),
            vec!["name", "sku", "price", "warehouse_id"]
        );
    }

    /// Optional fields never appear in the missing list
    #[test]
    fn test_optional_fields_not_required() {
        let req = CreateProductRequest {
            name: Some("Widget A".to_string()),
            sku: Some("SKU-001".to_string()),
            price: Some(dec("19.99")),
            warehouse_id: Some(1),
            company_id: None,
            product_type_id: None,
            initial_quantity: None,
        };
        assert!(missing_fields(&req).is_empty());
    }

    /// Defaulting contract: company 1, product type 1, quantity 0
    #[test]
    fn test_defaults() {
        let req = CreateProductRequest {
            name: Some("Widget A".to_string()),
            sku: Some("SKU-001".to_string()),
            price: Some(dec("19.99")),
            warehouse_id: Some(1),
            ..Default::default()
        };
        assert_eq!(req.company_id.unwrap_or(1), 1);
        assert_eq!(req.product_type_id.unwrap_or(1), 1);
        assert_eq!(req.initial_quantity.unwrap_or(0), 0);
    }

    #[test]
    fn test_sku_rules() {
        assert!(validate_sku("SKU-001").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("SKU 001").is_err());
        assert!(validate_sku(&"X".repeat(51)).is_err());
    }

    /// Prices are exact decimals; 19.99 stays 19.99
    #[test]
    fn test_price_is_exact() {
        let price = dec("19.99");
        assert_eq!(price.to_string(), "19.99");
        assert_eq!(price + dec("0.01"), dec("20.00"));
    }

    /// Storage scale is 2 decimal places
    #[test]
    fn test_price_normalization() {
        assert_eq!(dec("19.999").round_dp(2), dec("20.00"));
        assert_eq!(dec("19.99").round_dp(2), dec("19.99"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The missing list mentions exactly the absent required fields
        #[test]
        fn missing_list_matches_absent_fields(
            has_name in any::<bool>(),
            has_sku in any::<bool>(),
            has_price in any::<bool>(),
            has_warehouse in any::<bool>(),
        ) {
            let req = CreateProductRequest {
                name: has_name.then(|| "Widget".to_string()),
                sku: has_sku.then(|| "SKU-001".to_string()),
                price: has_price.then(|| dec("1.00")),
                warehouse_id: has_warehouse.then_some(1),
                ..Default::default()
            };
            let missing = missing_fields(&req);
            prop_assert_eq!(missing.contains(&"name"), !has_name);
            prop_assert_eq!(missing.contains(&"sku"), !has_sku);
            prop_assert_eq!(missing.contains(&"price"), !has_price);
            prop_assert_eq!(missing.contains(&"warehouse_id"), !has_warehouse);
        }

        /// Rounding to cents is idempotent
        #[test]
        fn price_normalization_is_idempotent(cents in 0i64..=1_000_000) {
            let price = Decimal::new(cents, 2);
            prop_assert_eq!(price.round_dp(2), price);
        }

        /// Nonempty whitespace-free SKUs up to 50 chars are accepted
        #[test]
        fn sku_acceptance(sku in "[A-Za-z0-9-]{1,50}") {
            prop_assert!(validate_sku(&sku).is_ok());
        }
    }
}
