//! # Order Totals
//!
//! The calculator behind every purchase and sales order form.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each line:  gross = qty × price                                    │
//! │                  net   = gross − gross × line_discount%                 │
//! │                                                                         │
//! │  subtotal        = Σ net                                                │
//! │  discount_amount = percentage ? subtotal × value% : value               │
//! │  taxable         = subtotal − discount_amount                           │
//! │  tax_amount      = taxable × rate%                                      │
//! │  total           = taxable + tax_amount                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `OrderTotals` is derived data. It has no setters; the form controller
//! calls [`calculate_totals`] again after every field edit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountPolicy, LineItem, OrderDiscount, TaxConfig};

// =============================================================================
// Order Totals
// =============================================================================

/// Derived totals for one order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line nets (after per-line discounts).
    pub subtotal: f64,
    /// Order-level discount taken off the subtotal.
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl OrderTotals {
    pub const fn zero() -> Self {
        OrderTotals {
            subtotal: 0.0,
            discount_amount: 0.0,
            tax_amount: 0.0,
            total: 0.0,
        }
    }

    /// Subtotal minus the order discount; the base the tax is computed on.
    #[inline]
    pub fn taxable_amount(&self) -> f64 {
        self.subtotal - self.discount_amount
    }

    /// Rounds every figure to cents for display.
    pub fn rounded(&self) -> TotalsView {
        TotalsView {
            subtotal: Money::from_amount(self.subtotal),
            discount_amount: Money::from_amount(self.discount_amount),
            taxable_amount: Money::from_amount(self.taxable_amount()),
            tax_amount: Money::from_amount(self.tax_amount),
            total: Money::from_amount(self.total),
        }
    }
}

/// Cent-rounded totals as shown in the order summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub taxable_amount: Money,
    pub tax_amount: Money,
    pub total: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes order totals, letting the order discount exceed the subtotal.
///
/// ## Example
/// ```rust
/// use stockwise_core::{calculate_totals, LineItem, OrderDiscount, TaxConfig};
///
/// let items = [LineItem::new(2.0, 50.0, 0.0)];
/// let totals = calculate_totals(&items, &OrderDiscount::percentage(10.0), &TaxConfig::new(10.0));
///
/// assert_eq!(totals.subtotal, 100.0);
/// assert_eq!(totals.discount_amount, 10.0);
/// assert_eq!(totals.tax_amount, 9.0);
/// assert_eq!(totals.total, 99.0);
/// ```
pub fn calculate_totals(
    items: &[LineItem],
    discount: &OrderDiscount,
    tax: &TaxConfig,
) -> OrderTotals {
    calculate_totals_with_policy(items, discount, tax, DiscountPolicy::Unclamped)
}

/// Computes order totals under an explicit [`DiscountPolicy`].
///
/// An order with no lines always totals zero, even with a fixed discount.
///
/// ## Example
/// ```rust
/// use stockwise_core::{calculate_totals_with_policy, DiscountPolicy, LineItem, OrderDiscount, TaxConfig};
///
/// let items = [LineItem::new(1.0, 100.0, 0.0)];
/// let discount = OrderDiscount::fixed(150.0);
/// let tax = TaxConfig::new(10.0);
///
/// let clamped = calculate_totals_with_policy(&items, &discount, &tax, DiscountPolicy::ClampToSubtotal);
/// assert_eq!(clamped.discount_amount, 100.0);
/// assert_eq!(clamped.total, 0.0);
///
/// let unclamped = calculate_totals_with_policy(&items, &discount, &tax, DiscountPolicy::Unclamped);
/// assert_eq!(unclamped.tax_amount, -5.0);
/// assert_eq!(unclamped.total, -55.0);
/// ```
pub fn calculate_totals_with_policy(
    items: &[LineItem],
    discount: &OrderDiscount,
    tax: &TaxConfig,
    policy: DiscountPolicy,
) -> OrderTotals {
    if items.is_empty() {
        return OrderTotals::zero();
    }

    let subtotal: f64 = items.iter().map(LineItem::net).sum();

    let discount_amount = match policy {
        DiscountPolicy::Unclamped => discount.amount_for(subtotal),
        DiscountPolicy::ClampToSubtotal => discount.amount_for(subtotal).min(subtotal),
    };

    let taxable = subtotal - discount_amount;
    let tax_amount = tax.tax_on(taxable);

    OrderTotals {
        subtotal,
        discount_amount,
        tax_amount,
        total: taxable + tax_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
