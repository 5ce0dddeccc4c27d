//! Line rows and raw numeric inputs.

use serde::Serialize;
use std::str::FromStr;
use stockwise_core::validation::{
    validate_discount_percent, validate_number, validate_quantity, validate_required,
    validate_unit_price,
};
use stockwise_core::{LineItem, ValidationError};
use uuid::Uuid;

use crate::error::{FieldError, FormError};
use crate::form::submission::LineDraft;

// =============================================================================
// Numeric Input
// =============================================================================

/// A numeric field as typed, plus the value used for live totals.
///
/// Live totals read empty or malformed text as 0 so the summary never shows
/// garbage while the user is typing; `raw` is kept so submit can still report
/// the bad input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericInput {
    raw: String,
    value: f64,
}

impl NumericInput {
    /// Lenient parse: empty, non-numeric or non-finite text counts as 0.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        };
        NumericInput { raw, value }
    }

    pub fn from_value(value: f64) -> Self {
        NumericInput {
            raw: value.to_string(),
            value,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Strict parse for submit-time validation.
    pub fn validated(&self, field: &str) -> Result<f64, ValidationError> {
        validate_number(field, &self.raw)
    }
}

// =============================================================================
// Item Field
// =============================================================================

/// Editable columns of a line row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    ProductId,
    Description,
    Quantity,
    UnitPrice,
    Discount,
}

impl ItemField {
    /// Name of the field inside a form path (`items.0.unitPrice`).
    pub const fn path_segment(&self) -> &'static str {
        match self {
            ItemField::ProductId => "productId",
            ItemField::Description => "description",
            ItemField::Quantity => "quantity",
            ItemField::UnitPrice => "unitPrice",
            ItemField::Discount => "discount",
        }
    }
}

impl FromStr for ItemField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productId" => Ok(ItemField::ProductId),
            "description" => Ok(ItemField::Description),
            "quantity" => Ok(ItemField::Quantity),
            "unitPrice" => Ok(ItemField::UnitPrice),
            "discount" => Ok(ItemField::Discount),
            other => Err(FormError::not_found("Line field", other)),
        }
    }
}

// =============================================================================
// Line Row
// =============================================================================

/// One editable line of an order form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRow {
    /// Stable key for the UI list; unaffected by removals.
    pub key: String,
    pub product_id: String,
    pub description: String,
    pub quantity: NumericInput,
    pub unit_price: NumericInput,
    pub discount: NumericInput,
}

impl LineRow {
    /// The row appended by "Add item": quantity 1, price 0, no discount.
    pub fn blank() -> Self {
        LineRow {
            key: Uuid::new_v4().to_string(),
            product_id: String::new(),
            description: String::new(),
            quantity: NumericInput::from_value(1.0),
            unit_price: NumericInput::from_value(0.0),
            discount: NumericInput::from_value(0.0),
        }
    }

    pub fn from_draft(draft: &LineDraft) -> Self {
        LineRow {
            key: Uuid::new_v4().to_string(),
            product_id: draft.product_id.clone(),
            description: draft.description.clone(),
            quantity: NumericInput::from_value(draft.quantity),
            unit_price: NumericInput::from_value(draft.unit_price),
            discount: NumericInput::from_value(draft.discount),
        }
    }

    /// The calculator's view of this row.
    pub fn line_item(&self) -> LineItem {
        LineItem::new(
            self.quantity.value(),
            self.unit_price.value(),
            self.discount.value(),
        )
    }

    pub fn set(&mut self, field: ItemField, raw: &str) {
        match field {
            ItemField::ProductId => self.product_id = raw.to_string(),
            ItemField::Description => self.description = raw.to_string(),
            ItemField::Quantity => self.quantity = NumericInput::parse(raw),
            ItemField::UnitPrice => self.unit_price = NumericInput::parse(raw),
            ItemField::Discount => self.discount = NumericInput::parse(raw),
        }
    }

    /// Appends every failing field of this row to `errors`.
    pub fn validate(&self, index: usize, errors: &mut Vec<FieldError>) {
        let path = |field: ItemField| format!("items.{}.{}", index, field.path_segment());

        if let Err(e) = validate_required("product", &self.product_id) {
            errors.push(FieldError::new(path(ItemField::ProductId), &e));
        }
        if let Err(e) = validate_required("description", &self.description) {
            errors.push(FieldError::new(path(ItemField::Description), &e));
        }
        if let Err(e) = self
            .quantity
            .validated("quantity")
            .and_then(validate_quantity)
        {
            errors.push(FieldError::new(path(ItemField::Quantity), &e));
        }
        if let Err(e) = self
            .unit_price
            .validated("unit price")
            .and_then(validate_unit_price)
        {
            errors.push(FieldError::new(path(ItemField::UnitPrice), &e));
        }
        // A blank discount means "no discount".
        if !self.discount.is_blank() {
            if let Err(e) = self
                .discount
                .validated("discount")
                .and_then(validate_discount_percent)
            {
                errors.push(FieldError::new(path(ItemField::Discount), &e));
            }
        }
    }
}
