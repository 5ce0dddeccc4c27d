//! # Domain Types
//!
//! Inputs to the totals calculator and the selectors found on order forms.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  OrderDiscount  │   │    TaxConfig    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  quantity       │   │  kind           │   │  rate_percent   │       │
//! │  │  unit_price     │   │  value          │   │  10 = 10%       │       │
//! │  │  discount_pct   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountType   │   │   OrderStatus   │   │  PaymentStatus  │       │
//! │  │  Percentage     │   │  Pending        │   │  Pending        │       │
//! │  │  Fixed          │   │  Shipped        │   │  Paid           │       │
//! │  └─────────────────┘   │  Received       │   │  Overdue        │       │
//! │                        │  Cancelled      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages are plain `f64` percent values (5.0 = 5%), the same unit the
//! form inputs use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::DEFAULT_TAX_RATE_PERCENT;

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity/price/discount row of an order.
///
/// ## Invariant
/// `net() == quantity * unit_price * (1 - discount_percent / 100)`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub quantity: f64,
    pub unit_price: f64,
    /// Discount for this line only, in percent.
    #[serde(default)]
    pub discount_percent: f64,
}

impl LineItem {
    pub const fn new(quantity: f64, unit_price: f64, discount_percent: f64) -> Self {
        LineItem {
            quantity,
            unit_price,
            discount_percent,
        }
    }

    /// Quantity times unit price, before the line discount.
    #[inline]
    pub fn gross(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Amount taken off this line by its own discount.
    #[inline]
    pub fn discount_amount(&self) -> f64 {
        self.gross() * (self.discount_percent / 100.0)
    }

    /// Line total after the line discount. This is what feeds the subtotal.
    #[inline]
    pub fn net(&self) -> f64 {
        self.gross() - self.discount_amount()
    }
}

// =============================================================================
// Order Discount
// =============================================================================

/// How the order-level discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// `value` is a percent of the items subtotal.
    #[default]
    Percentage,
    /// `value` is an absolute currency amount.
    Fixed,
}

impl DiscountType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }
}

impl FromStr for DiscountType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "percentage" => Ok(DiscountType::Percentage),
            "fixed" => Ok(DiscountType::Fixed),
            other => Err(CoreError::InvalidDiscountType(other.to_string())),
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single discount applied to the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDiscount {
    #[serde(rename = "type")]
    pub kind: DiscountType,
    pub value: f64,
}

impl OrderDiscount {
    pub const fn new(kind: DiscountType, value: f64) -> Self {
        OrderDiscount { kind, value }
    }

    pub const fn percentage(value: f64) -> Self {
        OrderDiscount::new(DiscountType::Percentage, value)
    }

    pub const fn fixed(value: f64) -> Self {
        OrderDiscount::new(DiscountType::Fixed, value)
    }

    /// Discount amount for a given items subtotal, before any clamping.
    ///
    /// ## Example
    /// ```rust
    /// use stockwise_core::OrderDiscount;
    ///
    /// assert_eq!(OrderDiscount::percentage(10.0).amount_for(200.0), 20.0);
    /// assert_eq!(OrderDiscount::fixed(500.0).amount_for(200.0), 500.0);
    /// ```
    pub fn amount_for(&self, subtotal: f64) -> f64 {
        match self.kind {
            DiscountType::Percentage => subtotal * (self.value / 100.0),
            DiscountType::Fixed => self.value,
        }
    }
}

/// Whether the order discount may exceed the items subtotal.
///
/// `Unclamped` lets a large fixed discount drive the taxable amount (and the
/// tax) negative. `ClampToSubtotal` caps the discount at the subtotal so the
/// taxable amount bottoms out at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    #[default]
    Unclamped,
    ClampToSubtotal,
}

// =============================================================================
// Tax Config
// =============================================================================

/// Tax applied to the taxable amount (subtotal minus order discount).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfig {
    pub rate_percent: f64,
}

impl TaxConfig {
    pub const fn new(rate_percent: f64) -> Self {
        TaxConfig { rate_percent }
    }

    pub const fn zero() -> Self {
        TaxConfig::new(0.0)
    }

    /// Tax owed on `taxable`. Negative when `taxable` is negative.
    #[inline]
    pub fn tax_on(&self, taxable: f64) -> f64 {
        taxable * (self.rate_percent / 100.0)
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig::new(DEFAULT_TAX_RATE_PERCENT)
    }
}

// =============================================================================
// Order Kind
// =============================================================================

/// Which side of the ledger an order form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Purchase,
    Sales,
}

impl OrderKind {
    /// Prefix of generated order numbers (`PO-2024-001`, `SO-2024-001`).
    pub const fn number_prefix(&self) -> &'static str {
        match self {
            OrderKind::Purchase => "PO",
            OrderKind::Sales => "SO",
        }
    }

    /// What the counterparty is called on this kind of order.
    pub const fn party_label(&self) -> &'static str {
        match self {
            OrderKind::Purchase => "supplier",
            OrderKind::Sales => "customer",
        }
    }
}

impl FromStr for OrderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "purchase" => Ok(OrderKind::Purchase),
            "sales" => Ok(OrderKind::Sales),
            other => Err(CoreError::InvalidStatus {
                field: "order kind".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Statuses
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Received,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Received,
        OrderStatus::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Received => "received",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Overdue,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus {
                field: "payment status".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
