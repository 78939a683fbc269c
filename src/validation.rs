//! Validation utilities for the StockFlow backend

use rust_decimal::Decimal;

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate SKU format (1-50 characters, no whitespace)
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
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

/// Validate a product price: non-negative fixed-point with 2 decimal places
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price must not be negative");
    }
    Ok(())
}

/// Normalize a price to 2 decimal places (NUMERIC(12, 2) storage scale)
pub fn normalize_price(price: Decimal) -> Decimal {
    price.round_dp(2)
}

/// Validate a display name (non-empty, at most 255 characters)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.len() > 255 {
        return Err("Name must be at most 255 characters");
    }
    Ok(())
}

/// Validate a reorder threshold
pub fn validate_threshold(threshold: i32) -> Result<(), &'static str> {
    if threshold < 0 {
        return Err("Threshold must not be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_sku_valid() {
        assert!(validate_sku("SKU-001").is_ok());
        assert!(validate_sku("a").is_ok());
    }

    #[test]
    fn test_validate_sku_empty() {
        assert!(validate_sku("").is_err());
    }

    #[test]
    fn test_validate_sku_whitespace() {
        assert!(validate_sku("SKU 001").is_err());
    }

    #[test]
    fn test_validate_sku_too_long() {
        let long = "X".repeat(51);
        assert!(validate_sku(&long).is_err());
    }

    #[test]
    fn test_validate_price_valid() {
        assert!(validate_price(Decimal::from_str("19.99").unwrap()).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_validate_price_negative() {
        assert!(validate_price(Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn test_normalize_price_rounds_to_cents() {
        let price = Decimal::from_str("19.999").unwrap();
        assert_eq!(normalize_price(price), Decimal::from_str("20.00").unwrap());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Widget A").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_threshold() {
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(10).is_ok());
        assert!(validate_threshold(-1).is_err());
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("orders@globaltech.com").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }
}
