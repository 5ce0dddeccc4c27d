//! # Form Error Type
//!
//! Unified error type returned by `OrderForm` operations.
//!
//! ## Serialization
//! This is what the UI receives when an operation fails:
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "3 fields are invalid",
//!   "fields": [
//!     { "path": "items.0.quantity", "message": "quantity must be positive" }
//!   ]
//! }
//! ```

use serde::Serialize;
use stockwise_core::{CoreError, ValidationError};
use ts_rs::TS;

/// Error returned from form operations.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field failures, empty unless `code` is `VALIDATION_ERROR`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Error codes for form responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more fields failed validation
    ValidationError,

    /// Row index or product id does not exist
    NotFound,

    /// The operation is not allowed in the form's current state
    InvalidOperation,

    /// Configuration could not be loaded
    ConfigError,
}

/// One failing field, addressed by its form path (`items.1.unitPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, err: &ValidationError) -> Self {
        FieldError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl FormError {
    /// Creates a new form error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        FormError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        FormError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error for a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        FormError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a validation error carrying every failing field.
    pub fn invalid_fields(fields: Vec<FieldError>) -> Self {
        let message = match fields.len() {
            1 => format!("{}: {}", fields[0].path, fields[0].message),
            n => format!("{} fields are invalid", n),
        };
        FormError {
            code: ErrorCode::ValidationError,
            message,
            fields,
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        FormError::new(ErrorCode::InvalidOperation, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        FormError::new(ErrorCode::ConfigError, message)
    }
}

/// Converts core errors to form errors.
impl From<CoreError> for FormError {
    fn from(err: CoreError) -> Self {
        FormError::validation(err.to_string())
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::validation(err.to_string())
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for FormError {}

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = FormError::not_found("Line item", 4);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Line item not found: 4");
    }

    #[test]
    fn test_invalid_fields_summary() {
        let one = FormError::invalid_fields(vec![FieldError::new(
            "taxRate",
            &ValidationError::OutOfRange {
                field: "tax rate".to_string(),
                min: 0.0,
                max: 100.0,
            },
        )]);
        assert_eq!(one.message, "taxRate: tax rate must be between 0 and 100");

        let many = FormError::invalid_fields(vec![
            FieldError {
                path: "a".to_string(),
                message: "x".to_string(),
            },
            FieldError {
                path: "b".to_string(),
                message: "y".to_string(),
            },
        ]);
        assert_eq!(many.message, "2 fields are invalid");
    }

    #[test]
    fn test_serialized_shape() {
        let err = FormError::invalid_operation("An order needs at least one line");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_OPERATION");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_core_error_converts() {
        let err: FormError = CoreError::InvalidDiscountType("flat".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "[ValidationError] Invalid discount type: flat");
    }
}
