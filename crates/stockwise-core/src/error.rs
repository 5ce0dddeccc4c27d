//! # Error Types
//!
//! Domain-specific error types for stockwise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockwise-core errors (this file)                                     │
//! │  ├── CoreError        - Selector parsing, wraps validation             │
//! │  └── ValidationError  - Field rule failures                            │
//! │                                                                         │
//! │  stockwise-forms errors (separate crate)                               │
//! │  ├── FieldError       - One failing field, addressed by its form path  │
//! │  └── FormError        - What the UI sees ({ code, message, fields })   │
//! │                                                                         │
//! │  Flow: ValidationError → FieldError → FormError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals calculator never fails; these errors only come out of
//! validation and enum parsing.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Discount type selector holds something other than `percentage`/`fixed`.
    #[error("Invalid discount type: {0}")]
    InvalidDiscountType(String),

    /// A status selector holds an unknown value.
    #[error("Invalid {field}: {value}")]
    InvalidStatus { field: String, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Messages match what the order form shows under each input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Raw input could not be read as a number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Invalid format (e.g., a date that isn't YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The order has fewer line items than required.
    #[error("At least {min} item is required")]
    TooFewItems { min: usize },

    /// The order has more line items than allowed.
    #[error("An order cannot have more than {max} items")]
    TooManyItems { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "supplier".to_string(),
        };
        assert_eq!(err.to_string(), "supplier is required");

        let err = ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "tax rate must be between 0 and 100");

        let err = ValidationError::InvalidNumber {
            field: "quantity".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be a number, got 'ten'");
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::InvalidDiscountType("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid discount type: bogus");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::TooFewItems { min: 1 };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
