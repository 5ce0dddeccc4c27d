//! # Money Module
//!
//! Cent-rounded monetary values for the display and submission boundary.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LineItem (f64) ──► calculate_totals (f64) ──► OrderTotals (f64)       │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                                          Money::from_amount  ◄── HERE   │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                                          "$11275.00" in the UI          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never computed from rounded values: rounding each line first
//! would drift from the figures the form shows while the user is typing.
//!
//! ## Usage
//! ```rust
//! use stockwise_core::money::Money;
//!
//! let total = Money::from_amount(11275.0);
//! assert_eq!(total.cents(), 1_127_500);
//! assert_eq!(total.to_string(), "$11275.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: an unclamped order discount can make tax and total negative
/// - **Single field tuple struct**: zero-cost wrapper over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a computed amount to the nearest cent, halves away from zero.
    ///
    /// NaN becomes zero and infinities saturate, following `as` casting.
    ///
    /// ## Example
    /// ```rust
    /// use stockwise_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(1037.5).cents(), 103_750);
    /// assert_eq!(Money::from_amount(0.125).cents(), 13);
    /// assert_eq!(Money::from_amount(-5.5).cents(), -550);
    /// ```
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Back to a float amount, e.g. for a JSON payload.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Formats with a custom currency symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use stockwise_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).format_with("€"), "-€5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Debug-friendly rendering with a `$` symbol. Forms use [`Money::format_with`]
/// with the configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}
