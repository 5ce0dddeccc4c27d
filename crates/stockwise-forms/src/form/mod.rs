//! # Order Form
//!
//! One purchase or sales order being edited.
//!
//! ## Edit Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Form Operations                                │
//! │                                                                         │
//! │  UI Action                 OrderForm method          Then               │
//! │  ─────────                 ────────────────          ────               │
//! │                                                                         │
//! │  Click "Add item" ───────► append_item() ──────────► recompute()        │
//! │  Click trash icon ───────► remove_item(i) ─────────► recompute()        │
//! │  Type in a line cell ────► set_item_field(i, f, s) ► recompute()        │
//! │  Pick a product ─────────► select_product(i, id) ──► recompute()        │
//! │  Change discount/tax ────► set_discount_*/set_tax ─► recompute()        │
//! │                                                                         │
//! │  Click "Save" ───────────► submit() ───► validate() ───► OrderSubmission│
//! │                                                                         │
//! │  NOTE: totals are recomputed from scratch after every mutation, so      │
//! │        they always match the current fields.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A form is owned by a single UI session and needs no locking.

mod line;
mod submission;

pub use line::{ItemField, LineRow, NumericInput};
pub use submission::{LineDraft, OrderDraft, OrderSubmission, SubmittedLine};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use stockwise_core::validation::{
    validate_discount_value, validate_item_count, validate_non_negative, validate_required,
    validate_tax_rate_percent,
};
use stockwise_core::{
    calculate_totals_with_policy, DiscountPolicy, DiscountType, LineItem, OrderDiscount, OrderKind,
    OrderStatus, OrderTotals, PaymentStatus, TaxConfig, TotalsView, ValidationError,
    MAX_LINE_ITEMS,
};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::config::FormConfig;
use crate::error::{FieldError, FormError, FormResult};

/// Date format accepted by the date inputs.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored totals further than this from the recomputed ones get a warning.
const STALE_TOTALS_TOLERANCE: f64 = 0.005;

/// Formatted order summary, as shown under the line items.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDisplay {
    pub values: TotalsView,
    pub subtotal: String,
    pub discount_amount: String,
    pub tax_amount: String,
    pub total: String,
}

#[derive(Debug, Clone)]
pub struct OrderForm {
    kind: OrderKind,
    policy: DiscountPolicy,
    currency_symbol: String,

    party_id: String,
    order_number: String,
    date: NaiveDate,
    expected_date: Option<NaiveDate>,
    status: OrderStatus,
    payment_status: PaymentStatus,
    payment_terms: String,
    notes: String,

    items: Vec<LineRow>,
    discount_type: DiscountType,
    discount_value: NumericInput,
    tax_rate: NumericInput,

    totals: OrderTotals,
}

impl OrderForm {
    /// Creates a blank form dated today.
    pub fn new(kind: OrderKind, config: &FormConfig) -> Self {
        Self::new_at(kind, config, Utc::now())
    }

    /// Creates a blank form as if opened at `now`.
    ///
    /// ## Defaults
    /// - One blank line (quantity 1, price 0)
    /// - Order number `{PO|SO}-{year}-{last three digits of the timestamp}`
    /// - Expected date `config.expected_lead_days` after today, left empty
    ///   when that lands outside the calendar
    /// - Tax rate and discount type from `config`
    pub fn new_at(kind: OrderKind, config: &FormConfig, now: DateTime<Utc>) -> Self {
        let date = now.date_naive();
        let order_number = format!(
            "{}-{}-{:03}",
            kind.number_prefix(),
            date.year(),
            now.timestamp_millis().rem_euclid(1000)
        );

        let mut form = OrderForm {
            kind,
            policy: config.discount_policy,
            currency_symbol: config.currency_symbol.clone(),
            party_id: String::new(),
            order_number,
            date,
            expected_date: expected_after(date, config.expected_lead_days),
            status: OrderStatus::default(),
            payment_status: PaymentStatus::default(),
            payment_terms: String::new(),
            notes: String::new(),
            items: vec![LineRow::blank()],
            discount_type: config.default_discount_type,
            discount_value: NumericInput::from_value(0.0),
            tax_rate: NumericInput::from_value(config.default_tax_rate_percent),
            totals: OrderTotals::zero(),
        };
        form.recompute();
        form
    }

    /// Loads a stored order for editing.
    ///
    /// Totals are recomputed from the loaded fields; stored totals that
    /// disagree are logged and dropped.
    pub fn from_draft(kind: OrderKind, draft: OrderDraft, config: &FormConfig) -> Self {
        let mut form = OrderForm {
            kind,
            policy: config.discount_policy,
            currency_symbol: config.currency_symbol.clone(),
            party_id: draft.party_id,
            order_number: draft.order_number,
            date: draft.date,
            expected_date: draft.expected_date,
            status: draft.status,
            payment_status: draft.payment_status,
            payment_terms: draft.payment_terms.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            items: draft.items.iter().map(LineRow::from_draft).collect(),
            discount_type: draft.discount_type,
            discount_value: NumericInput::from_value(draft.discount_value),
            tax_rate: NumericInput::from_value(draft.tax_rate),
            totals: OrderTotals::zero(),
        };
        form.recompute();

        if let Some(stored) = draft.stored_totals {
            if !totals_match(&stored, &form.totals) {
                warn!(
                    order_number = %form.order_number,
                    stored_total = stored.total,
                    recomputed_total = form.totals.total,
                    "Stored totals are stale, using recomputed values"
                );
            }
        }

        form
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn expected_date(&self) -> Option<NaiveDate> {
        self.expected_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn items(&self) -> &[LineRow] {
        &self.items
    }

    /// Current totals. Always consistent with the current fields.
    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(LineRow::line_item).collect()
    }

    pub fn order_discount(&self) -> OrderDiscount {
        OrderDiscount::new(self.discount_type, self.discount_value.value())
    }

    pub fn tax_config(&self) -> TaxConfig {
        TaxConfig::new(self.tax_rate.value())
    }

    /// Totals rounded to cents and formatted with the configured symbol.
    pub fn view(&self) -> TotalsDisplay {
        let values = self.totals.rounded();
        let symbol = self.currency_symbol.as_str();
        TotalsDisplay {
            values,
            subtotal: values.subtotal.format_with(symbol),
            discount_amount: values.discount_amount.format_with(symbol),
            tax_amount: values.tax_amount.format_with(symbol),
            total: values.total.format_with(symbol),
        }
    }

    // =========================================================================
    // Line Mutations
    // =========================================================================

    /// Appends a blank line and returns its index.
    pub fn append_item(&mut self) -> FormResult<usize> {
        if self.items.len() >= MAX_LINE_ITEMS {
            return Err(FormError::invalid_operation(format!(
                "An order cannot have more than {} items",
                MAX_LINE_ITEMS
            )));
        }

        self.items.push(LineRow::blank());
        self.recompute();
        Ok(self.items.len() - 1)
    }

    /// Removes a line. The last remaining line cannot be removed.
    pub fn remove_item(&mut self, index: usize) -> FormResult<()> {
        self.check_index(index)?;

        if self.items.len() == 1 {
            warn!(order_number = %self.order_number, "Refusing to remove the only line");
            return Err(FormError::invalid_operation(
                "An order needs at least one line",
            ));
        }

        self.items.remove(index);
        self.recompute();
        Ok(())
    }

    /// Writes raw input text into one cell of a line.
    pub fn set_item_field(&mut self, index: usize, field: ItemField, raw: &str) -> FormResult<()> {
        self.check_index(index)?;
        self.items[index].set(field, raw);
        self.recompute();
        Ok(())
    }

    /// Picks a catalog product for a line, filling its description and price.
    ///
    /// An empty id clears the selection without touching the other cells.
    /// An id missing from the catalog is reported as `NOT_FOUND` and leaves
    /// the line as it was.
    pub fn select_product(&mut self, index: usize, product_id: &str, catalog: &Catalog) -> FormResult<()> {
        self.check_index(index)?;

        if product_id.is_empty() {
            self.items[index].product_id.clear();
            return Ok(());
        }

        let product = catalog
            .find(product_id)
            .ok_or_else(|| FormError::not_found("Product", product_id))?;

        let row = &mut self.items[index];
        row.product_id = product.id.clone();
        row.description = product.line_description();
        row.unit_price = NumericInput::from_value(product.price);
        self.recompute();
        Ok(())
    }

    fn check_index(&self, index: usize) -> FormResult<()> {
        if index >= self.items.len() {
            return Err(FormError::not_found("Line item", index));
        }
        Ok(())
    }

    // =========================================================================
    // Discount & Tax Mutations
    // =========================================================================

    pub fn set_discount_type(&mut self, raw: &str) -> FormResult<()> {
        self.discount_type = raw.parse()?;
        self.recompute();
        Ok(())
    }

    pub fn set_discount_value(&mut self, raw: &str) {
        self.discount_value = NumericInput::parse(raw);
        self.recompute();
    }

    pub fn set_tax_rate(&mut self, raw: &str) {
        self.tax_rate = NumericInput::parse(raw);
        self.recompute();
    }

    // =========================================================================
    // Header Mutations
    // =========================================================================

    pub fn set_party(&mut self, party_id: &str) {
        self.party_id = party_id.to_string();
    }

    pub fn set_order_number(&mut self, order_number: &str) {
        self.order_number = order_number.to_string();
    }

    pub fn set_date(&mut self, raw: &str) -> FormResult<()> {
        self.date = parse_date("date", raw)?;
        Ok(())
    }

    /// Sets the expected delivery date. Blank input clears it.
    pub fn set_expected_date(&mut self, raw: &str) -> FormResult<()> {
        self.expected_date = if raw.trim().is_empty() {
            None
        } else {
            Some(parse_date("expected date", raw)?)
        };
        Ok(())
    }

    pub fn set_status(&mut self, raw: &str) -> FormResult<()> {
        self.status = raw.parse()?;
        Ok(())
    }

    pub fn set_payment_status(&mut self, raw: &str) -> FormResult<()> {
        self.payment_status = raw.parse()?;
        Ok(())
    }

    pub fn set_payment_terms(&mut self, terms: &str) {
        self.payment_terms = terms.to_string();
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    // =========================================================================
    // Recompute, Validate, Submit
    // =========================================================================

    /// Rebuilds the totals from the current fields.
    fn recompute(&mut self) {
        self.totals = calculate_totals_with_policy(
            &self.line_items(),
            &self.order_discount(),
            &self.tax_config(),
            self.policy,
        );

        debug!(
            order_number = %self.order_number,
            lines = self.items.len(),
            subtotal = self.totals.subtotal,
            discount = self.totals.discount_amount,
            tax = self.totals.tax_amount,
            total = self.totals.total,
            "Recomputed order totals"
        );
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> FormResult<()> {
        let mut errors = Vec::new();
        let mut check = |path: &str, result: Result<(), ValidationError>| {
            if let Err(e) = result {
                errors.push(FieldError::new(path, &e));
            }
        };

        check("partyId", validate_required(self.kind.party_label(), &self.party_id));
        check("orderNumber", validate_required("order number", &self.order_number));
        if self.expected_date.is_none() {
            check(
                "expectedDate",
                Err(ValidationError::Required {
                    field: "expected date".to_string(),
                }),
            );
        }

        check("items", validate_item_count(self.items.len()));

        check(
            "taxRate",
            self.tax_rate
                .validated("tax rate")
                .and_then(validate_tax_rate_percent),
        );
        if !self.discount_value.is_blank() {
            check(
                "discountValue",
                self.discount_value
                    .validated("discount value")
                    .and_then(validate_discount_value),
            );
        }

        check("subtotal", validate_non_negative("subtotal", self.totals.subtotal));
        check(
            "discountAmount",
            validate_non_negative("discount amount", self.totals.discount_amount),
        );
        check("taxAmount", validate_non_negative("tax amount", self.totals.tax_amount));
        check("total", validate_non_negative("total", self.totals.total));

        for (index, row) in self.items.iter().enumerate() {
            row.validate(index, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(
                order_number = %self.order_number,
                failures = errors.len(),
                "Order form failed validation"
            );
            Err(FormError::invalid_fields(errors))
        }
    }

    /// Validates the form and builds the submission payload.
    pub fn submit(&self) -> FormResult<OrderSubmission> {
        self.validate()?;

        let expected_date = self.expected_date.ok_or_else(|| {
            FormError::validation("expected date is required")
        })?;

        let items = self
            .items
            .iter()
            .map(|row| {
                let item = row.line_item();
                SubmittedLine {
                    product_id: row.product_id.clone(),
                    description: row.description.trim().to_string(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    discount_percent: item.discount_percent,
                    net: item.net(),
                }
            })
            .collect();

        info!(
            kind = ?self.kind,
            order_number = %self.order_number,
            total = self.totals.total,
            "Order form submitted"
        );

        Ok(OrderSubmission {
            kind: self.kind,
            party_id: self.party_id.clone(),
            order_number: self.order_number.clone(),
            date: self.date,
            expected_date,
            items,
            discount: self.order_discount(),
            tax: self.tax_config(),
            totals: self.totals,
            status: self.status,
            payment_status: self.payment_status,
            payment_terms: non_empty(&self.payment_terms),
            notes: non_empty(&self.notes),
        })
    }
}

fn parse_date(field: &str, raw: &str) -> FormResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        FormError::from(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        })
    })
}

fn expected_after(date: NaiveDate, lead_days: i64) -> Option<NaiveDate> {
    Duration::try_days(lead_days).and_then(|lead| date.checked_add_signed(lead))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn totals_match(a: &OrderTotals, b: &OrderTotals) -> bool {
    [
        (a.subtotal, b.subtotal),
        (a.discount_amount, b.discount_amount),
        (a.tax_amount, b.tax_amount),
        (a.total, b.total),
    ]
    .iter()
    .all(|(x, y)| (x - y).abs() < STALE_TOTALS_TOLERANCE)
}

#[cfg(test)]
mod tests;
