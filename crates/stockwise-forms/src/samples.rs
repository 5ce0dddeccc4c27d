//! Sample orders used by the demo binary and tests.

use chrono::NaiveDate;
use stockwise_core::{DiscountType, OrderStatus, OrderTotals, PaymentStatus};

use crate::form::{LineDraft, OrderDraft};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// `PO-2024-001`: two phones, a fixed 500 discount and 10% tax.
///
/// The stored totals do not match the lines: their subtotal ignores the 5%
/// line discount (10750 instead of 10375) and their tax (1037.50) was taken on
/// the subtotal before the order discount. Loading the draft recomputes them.
pub fn sample_purchase_order() -> OrderDraft {
    OrderDraft {
        party_id: "1".to_string(),
        order_number: "PO-2024-001".to_string(),
        date: ymd(2024, 1, 15),
        expected_date: Some(ymd(2024, 1, 25)),
        items: vec![
            LineDraft {
                product_id: "1".to_string(),
                description: "iPhone 15 Pro - 128GB (Wholesale)".to_string(),
                quantity: 10.0,
                unit_price: 750.00,
                discount: 5.0,
            },
            LineDraft {
                product_id: "2".to_string(),
                description: "Samsung Galaxy S24 - 256GB (Wholesale)".to_string(),
                quantity: 5.0,
                unit_price: 650.00,
                discount: 0.0,
            },
        ],
        tax_rate: 10.0,
        discount_type: DiscountType::Fixed,
        discount_value: 500.0,
        status: OrderStatus::Received,
        payment_status: PaymentStatus::Paid,
        payment_terms: Some("Net 30".to_string()),
        notes: Some("Bulk order for Q1 inventory".to_string()),
        stored_totals: Some(OrderTotals {
            subtotal: 10750.00,
            discount_amount: 500.00,
            tax_amount: 1037.50,
            total: 11287.50,
        }),
    }
}

/// `SO-2024-001`: one laptop sold with a fixed 50 discount and 10% tax.
pub fn sample_sales_order() -> OrderDraft {
    OrderDraft {
        party_id: "2".to_string(),
        order_number: "SO-2024-001".to_string(),
        date: ymd(2024, 1, 15),
        expected_date: Some(ymd(2024, 1, 18)),
        items: vec![LineDraft {
            product_id: "3".to_string(),
            description: "MacBook Air M3".to_string(),
            quantity: 1.0,
            unit_price: 1250.00,
            discount: 0.0,
        }],
        tax_rate: 10.0,
        discount_type: DiscountType::Fixed,
        discount_value: 50.0,
        status: OrderStatus::Shipped,
        payment_status: PaymentStatus::Pending,
        payment_terms: None,
        notes: None,
        stored_totals: None,
    }
}
