use chrono::TimeZone;

use super::*;
use crate::error::ErrorCode;
use crate::samples::{sample_purchase_order, sample_sales_order};

fn opened_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap()
        + Duration::milliseconds(42)
}

fn blank_purchase() -> OrderForm {
    OrderForm::new_at(OrderKind::Purchase, &FormConfig::default(), opened_at())
}

/// Fills the blank form with the two sample lines and a supplier.
fn filled_purchase() -> OrderForm {
    let catalog = Catalog::sample();
    let mut form = blank_purchase();
    form.set_party("1");

    form.select_product(0, "1", &catalog).unwrap();
    form.set_item_field(0, ItemField::Quantity, "10").unwrap();
    form.set_item_field(0, ItemField::Discount, "5").unwrap();

    let second = form.append_item().unwrap();
    form.select_product(second, "2", &catalog).unwrap();
    form.set_item_field(second, ItemField::Quantity, "5").unwrap();

    form.set_discount_type("fixed").unwrap();
    form.set_discount_value("500");
    form
}

fn paths(err: &FormError) -> Vec<&str> {
    err.fields.iter().map(|f| f.path.as_str()).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_new_form_defaults() {
    let form = blank_purchase();

    assert_eq!(form.order_number(), "PO-2024-042");
    assert_eq!(form.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(
        form.expected_date(),
        NaiveDate::from_ymd_opt(2024, 1, 25)
    );
    assert_eq!(form.items().len(), 1);
    assert_eq!(form.tax_config(), TaxConfig::new(10.0));
    assert_eq!(form.order_discount(), OrderDiscount::percentage(0.0));
    assert_eq!(form.status(), OrderStatus::Pending);
    assert_eq!(form.payment_status(), PaymentStatus::Pending);
    assert_eq!(form.totals(), OrderTotals::zero());
}

#[test]
fn test_unreachable_lead_days_leave_expected_date_empty() {
    // Built directly; the loaders refuse this value.
    let config = FormConfig {
        expected_lead_days: 9_000_000_000_000,
        ..FormConfig::default()
    };
    let form = OrderForm::new_at(OrderKind::Purchase, &config, opened_at());

    assert_eq!(form.expected_date(), None);
    assert_eq!(paths(&form.validate().unwrap_err())[1], "expectedDate");
}

#[test]
fn test_sales_form_uses_sales_prefix_and_config() {
    let config = FormConfig {
        default_tax_rate_percent: 5.0,
        default_discount_type: DiscountType::Fixed,
        ..FormConfig::default()
    };
    let form = OrderForm::new_at(OrderKind::Sales, &config, opened_at());

    assert!(form.order_number().starts_with("SO-2024-"));
    assert_eq!(form.kind(), OrderKind::Sales);
    assert_eq!(form.tax_config().rate_percent, 5.0);
    assert_eq!(form.order_discount().kind, DiscountType::Fixed);
}

#[test]
fn test_every_edit_recomputes_totals() {
    let mut form = filled_purchase();
    assert_eq!(form.totals().subtotal, 10375.0);
    assert_eq!(form.totals().discount_amount, 500.0);
    assert_close(form.totals().tax_amount, 987.5);
    assert_close(form.totals().total, 10862.5);

    form.set_tax_rate("0");
    assert_eq!(form.totals().total, 9875.0);

    form.set_discount_type("percentage").unwrap();
    form.set_discount_value("10");
    assert_close(form.totals().discount_amount, 1037.5);

    form.remove_item(1).unwrap();
    assert_eq!(form.totals().subtotal, 7125.0);

    // Totals always match a fresh calculation over the current fields.
    let fresh = stockwise_core::calculate_totals(
        &form.line_items(),
        &form.order_discount(),
        &form.tax_config(),
    );
    assert_eq!(form.totals(), fresh);
}

#[test]
fn test_garbage_input_counts_as_zero_live() {
    let mut form = filled_purchase();
    form.set_item_field(1, ItemField::Quantity, "").unwrap();
    assert_eq!(form.totals().subtotal, 7125.0);

    form.set_item_field(1, ItemField::Quantity, "five").unwrap();
    assert_eq!(form.totals().subtotal, 7125.0);

    form.set_tax_rate("");
    assert_eq!(form.totals().tax_amount, 0.0);
}

#[test]
fn test_view_formats_two_decimals() {
    let form = filled_purchase();
    let view = form.view();

    assert_eq!(view.subtotal, "$10375.00");
    assert_eq!(view.discount_amount, "$500.00");
    assert_eq!(view.tax_amount, "$987.50");
    assert_eq!(view.total, "$10862.50");
    assert_eq!(view.values.taxable_amount.cents(), 987_500);
}

#[test]
fn test_view_uses_configured_symbol() {
    let config = FormConfig {
        currency_symbol: "Rs ".to_string(),
        ..FormConfig::default()
    };
    let form = OrderForm::from_draft(OrderKind::Purchase, sample_purchase_order(), &config);
    assert_eq!(form.view().total, "Rs 10862.50");
}

#[test]
fn test_cannot_remove_last_line() {
    let mut form = blank_purchase();
    let err = form.remove_item(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidOperation);
    assert_eq!(form.items().len(), 1);
}

#[test]
fn test_out_of_range_index() {
    let mut form = blank_purchase();
    let err = form.set_item_field(3, ItemField::Quantity, "1").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(form.remove_item(3).unwrap_err().code, ErrorCode::NotFound);
}

#[test]
fn test_append_respects_line_limit() {
    let mut form = blank_purchase();
    for _ in 1..MAX_LINE_ITEMS {
        form.append_item().unwrap();
    }
    assert_eq!(form.items().len(), MAX_LINE_ITEMS);
    assert_eq!(
        form.append_item().unwrap_err().code,
        ErrorCode::InvalidOperation
    );
}

#[test]
fn test_remove_keeps_other_row_keys() {
    let mut form = filled_purchase();
    form.append_item().unwrap();
    let kept = form.items()[2].key.clone();

    form.remove_item(1).unwrap();
    assert_eq!(form.items()[1].key, kept);
}

#[test]
fn test_select_product() {
    let catalog = Catalog::sample();
    let mut form = blank_purchase();

    form.select_product(0, "3", &catalog).unwrap();
    let row = &form.items()[0];
    assert_eq!(row.product_id, "3");
    assert_eq!(row.description, "MacBook Air M3 (Wholesale)");
    assert_eq!(row.unit_price.value(), 999.99);
    assert_eq!(form.totals().subtotal, 999.99);

    let err = form.select_product(0, "42", &catalog).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(form.items()[0].product_id, "3");

    form.select_product(0, "", &catalog).unwrap();
    assert_eq!(form.items()[0].product_id, "");
    assert_eq!(form.items()[0].unit_price.value(), 999.99);
}

#[test]
fn test_invalid_selectors_leave_state_unchanged() {
    let mut form = filled_purchase();
    assert!(form.set_discount_type("flat").is_err());
    assert_eq!(form.order_discount().kind, DiscountType::Fixed);

    assert!(form.set_status("lost").is_err());
    form.set_status("shipped").unwrap();
    assert_eq!(form.status(), OrderStatus::Shipped);

    form.set_payment_status("paid").unwrap();
    assert_eq!(form.payment_status(), PaymentStatus::Paid);

    assert!(form.set_date("15/01/2024").is_err());
    form.set_date("2024-02-01").unwrap();
    assert_eq!(form.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
}

#[test]
fn test_blank_form_validation_reports_every_field() {
    let err = blank_purchase().validate().unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(
        paths(&err),
        vec![
            "partyId",
            "items.0.productId",
            "items.0.description",
            "items.0.unitPrice",
        ]
    );
    assert_eq!(err.fields[0].message, "supplier is required");
}

#[test]
fn test_validation_rejects_bad_numbers_and_ranges() {
    let mut form = filled_purchase();
    form.set_tax_rate("110");
    form.set_discount_value("-5");
    form.set_item_field(0, ItemField::Quantity, "ten").unwrap();
    form.set_expected_date("").unwrap();

    let err = form.validate().unwrap_err();
    assert_eq!(
        paths(&err),
        vec![
            "expectedDate",
            "taxRate",
            "discountValue",
            "discountAmount",
            "items.0.quantity",
        ]
    );
    assert_eq!(err.fields[4].message, "quantity must be a number, got 'ten'");
}

#[test]
fn test_oversized_fixed_discount_fails_on_negative_totals() {
    let mut form = filled_purchase();
    form.set_discount_value("20000");

    assert!(form.totals().total < 0.0);
    let err = form.submit().unwrap_err();
    assert_eq!(paths(&err), vec!["taxAmount", "total"]);
}

#[test]
fn test_overflowing_line_values_fail_validation() {
    let mut form = filled_purchase();
    form.set_item_field(1, ItemField::Quantity, "1e200").unwrap();
    form.set_item_field(1, ItemField::UnitPrice, "1e200").unwrap();

    assert!(form.totals().total.is_nan());
    let err = form.submit().unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(paths(&err), vec!["subtotal", "taxAmount", "total"]);
}

#[test]
fn test_clamped_policy_accepts_oversized_discount() {
    let config = FormConfig {
        discount_policy: DiscountPolicy::ClampToSubtotal,
        ..FormConfig::default()
    };
    let mut form = OrderForm::from_draft(OrderKind::Purchase, sample_purchase_order(), &config);
    form.set_discount_value("20000");

    assert_eq!(form.totals().discount_amount, 10375.0);
    assert_eq!(form.totals().total, 0.0);
    assert!(form.submit().is_ok());
}

#[test]
fn test_edit_mode_recomputes_stale_totals() {
    let draft = sample_purchase_order();
    let stored = draft.stored_totals.unwrap();
    let form = OrderForm::from_draft(OrderKind::Purchase, draft, &FormConfig::default());

    assert_eq!(stored.subtotal, 10750.0);
    assert_eq!(form.totals().subtotal, 10375.0);
    assert_close(form.totals().tax_amount, 987.5);
    assert_close(form.totals().total, 10862.5);
    assert!(!totals_match(&stored, &form.totals()));
}

#[test]
fn test_submit_sample_purchase() {
    let form = OrderForm::from_draft(
        OrderKind::Purchase,
        sample_purchase_order(),
        &FormConfig::default(),
    );
    let submission = form.submit().unwrap();

    assert_eq!(submission.order_number, "PO-2024-001");
    assert_eq!(submission.items.len(), 2);
    assert_eq!(submission.items[0].net, 7125.0);
    assert_eq!(submission.items[1].net, 3250.0);
    assert_eq!(submission.discount, OrderDiscount::fixed(500.0));
    assert_close(submission.totals.total, 10862.5);
    assert_eq!(submission.payment_terms.as_deref(), Some("Net 30"));

    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["kind"], "purchase");
    assert_eq!(json["expectedDate"], "2024-01-25");
    assert_eq!(json["discount"]["type"], "fixed");
    assert_close(json["totals"]["taxAmount"].as_f64().unwrap(), 987.5);
}

#[test]
fn test_submit_sample_sales() {
    let form = OrderForm::from_draft(OrderKind::Sales, sample_sales_order(), &FormConfig::default());
    let submission = form.submit().unwrap();

    assert_eq!(submission.totals.subtotal, 1250.0);
    assert_eq!(submission.totals.discount_amount, 50.0);
    assert_eq!(submission.totals.tax_amount, 120.0);
    assert_eq!(submission.totals.total, 1320.0);
    assert!(submission.notes.is_none());
}

#[test]
fn test_filled_form_submits() {
    let mut form = filled_purchase();
    form.set_notes("  ");
    form.set_payment_terms("Net 15");

    let submission = form.submit().unwrap();
    assert_eq!(submission.party_id, "1");
    assert_eq!(submission.items[0].description, "iPhone 15 Pro (Wholesale)");
    assert!(submission.notes.is_none());
    assert_eq!(submission.payment_terms.as_deref(), Some("Net 15"));
}
