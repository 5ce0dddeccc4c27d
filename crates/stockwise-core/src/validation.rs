//! # Validation Module
//!
//! Field-level rules for order forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keystroke (stockwise-forms)                                  │
//! │  ├── Lenient parse: empty / garbage reads as 0                         │
//! │  └── Totals recompute immediately, never blocked                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submit (stockwise-forms::OrderForm::validate)                │
//! │  └── THIS MODULE: every field checked, errors collected by path        │
//! │                                                                         │
//! │  The totals calculator itself assumes validated input and never fails. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockwise_core::validation::{validate_quantity, validate_tax_rate_percent};
//!
//! assert!(validate_quantity(5.0).is_ok());
//! assert!(validate_tax_rate_percent(120.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_ITEMS, MAX_PERCENT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Validators
// =============================================================================

/// Validates that a text field is present.
///
/// ## Example
/// ```rust
/// use stockwise_core::validation::validate_required;
///
/// assert!(validate_required("supplier", "1").is_ok());
/// assert!(validate_required("supplier", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates that raw input text reads as a finite number.
///
/// Empty input is reported as missing rather than malformed.
///
/// ## Returns
/// The parsed value.
pub fn validate_number(field: &str, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: f64) -> ValidationResult<()> {
    validate_positive("quantity", qty)
}

/// Validates a line unit price.
///
/// ## Rules
/// - Must be positive (> 0); free lines are entered with a 100% discount
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    validate_positive("unit price", price)
}

/// Validates a per-line discount percentage.
pub fn validate_discount_percent(pct: f64) -> ValidationResult<()> {
    validate_percent("discount", pct)
}

/// Validates the order tax rate.
///
/// ## Example
/// ```rust
/// use stockwise_core::validation::validate_tax_rate_percent;
///
/// assert!(validate_tax_rate_percent(0.0).is_ok());
/// assert!(validate_tax_rate_percent(100.0).is_ok());
/// assert!(validate_tax_rate_percent(-1.0).is_err());
/// ```
pub fn validate_tax_rate_percent(rate: f64) -> ValidationResult<()> {
    validate_percent("tax rate", rate)
}

/// Validates the order discount value.
///
/// ## Rules
/// - Must be zero or greater. A percentage value above 100 or a fixed value
///   above the subtotal is caught later by the non-negative total check.
pub fn validate_discount_value(value: f64) -> ValidationResult<()> {
    validate_non_negative("discount value", value)
}

/// Validates that a value (usually a computed total) is finite and not negative.
///
/// Huge line values overflow to infinity and then to NaN, which compares
/// false against zero, so non-finite values are rejected first.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_percent(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_PERCENT).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items on an order.
///
/// ## Rules
/// - At least one item
/// - At most MAX_LINE_ITEMS (100)
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::TooFewItems { min: 1 });
    }

    if count > MAX_LINE_ITEMS {
        return Err(ValidationError::TooManyItems {
            max: MAX_LINE_ITEMS,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("description", "iPhone 15 Pro").is_ok());
        assert_eq!(
            validate_required("description", ""),
            Err(ValidationError::Required {
                field: "description".to_string()
            })
        );
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number("quantity", " 10 "), Ok(10.0));
        assert_eq!(validate_number("unit price", "999.99"), Ok(999.99));
        assert!(matches!(
            validate_number("quantity", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_number("quantity", "ten"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_number("quantity", "NaN"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(validate_number("quantity", "inf").is_err());
    }

    #[test]
    fn test_validate_quantity_and_price() {
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(0.5).is_ok());
        assert!(validate_quantity(0.0).is_err());
        assert!(validate_quantity(-1.0).is_err());

        assert!(validate_unit_price(750.0).is_ok());
        assert!(validate_unit_price(0.0).is_err());
    }

    #[test]
    fn test_validate_percentages() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(5.0).is_ok());
        assert!(validate_discount_percent(100.0).is_ok());
        assert!(validate_discount_percent(100.5).is_err());
        assert!(validate_discount_percent(-0.1).is_err());

        assert!(validate_tax_rate_percent(10.0).is_ok());
        assert!(validate_tax_rate_percent(101.0).is_err());
        assert!(validate_tax_rate_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_discount_value() {
        assert!(validate_discount_value(0.0).is_ok());
        assert!(validate_discount_value(500.0).is_ok());
        assert!(validate_discount_value(-1.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("total", 0.0).is_ok());
        assert_eq!(
            validate_non_negative("total", -220.0).unwrap_err().to_string(),
            "total cannot be negative"
        );
    }

    #[test]
    fn test_validate_non_negative_rejects_non_finite() {
        assert_eq!(
            validate_non_negative("total", f64::NAN).unwrap_err().to_string(),
            "total must be a number, got 'NaN'"
        );
        assert!(validate_non_negative("subtotal", f64::INFINITY).is_err());
        assert!(validate_non_negative("subtotal", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count(1).is_ok());
        assert!(validate_item_count(MAX_LINE_ITEMS).is_ok());
        assert_eq!(
            validate_item_count(0),
            Err(ValidationError::TooFewItems { min: 1 })
        );
        assert!(validate_item_count(MAX_LINE_ITEMS + 1).is_err());
    }
}
