//! Payloads entering (drafts) and leaving (submissions) an order form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockwise_core::{
    DiscountType, OrderDiscount, OrderKind, OrderStatus, OrderTotals, PaymentStatus, TaxConfig,
};
use ts_rs::TS;

/// A stored line loaded into an edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineDraft {
    pub product_id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Line discount in percent.
    #[serde(default)]
    pub discount: f64,
}

/// A stored order loaded into an edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Supplier for purchases, customer for sales.
    pub party_id: String,
    pub order_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "Option<String>")]
    pub expected_date: Option<NaiveDate>,
    pub items: Vec<LineDraft>,
    pub tax_rate: f64,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Totals saved alongside the order. Compared against on load, never reused.
    #[serde(default)]
    pub stored_totals: Option<OrderTotals>,
}

/// One line of a validated submission.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedLine {
    pub product_id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount_percent: f64,
    /// Line total after the line discount.
    pub net: f64,
}

/// A validated order, ready to hand to whatever persists orders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub kind: OrderKind,
    pub party_id: String,
    pub order_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub expected_date: NaiveDate,
    pub items: Vec<SubmittedLine>,
    pub discount: OrderDiscount,
    pub tax: TaxConfig,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_terms: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults_from_json() {
        let draft: OrderDraft = serde_json::from_str(
            r#"{
                "partyId": "1",
                "orderNumber": "PO-2024-002",
                "date": "2024-02-01",
                "expectedDate": null,
                "items": [{ "productId": "3", "description": "MacBook", "quantity": 1, "unitPrice": 999.99 }],
                "taxRate": 10
            }"#,
        )
        .unwrap();

        assert_eq!(draft.discount_type, DiscountType::Percentage);
        assert_eq!(draft.discount_value, 0.0);
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.items[0].discount, 0.0);
        assert!(draft.stored_totals.is_none());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
