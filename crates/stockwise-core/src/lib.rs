//! # stockwise-core: Pure Order Arithmetic for Stockwise
//!
//! This crate holds the business rules behind every purchase and sales order
//! form: line-item subtotals, per-line discounts, the order-level discount,
//! tax, and the grand total. Everything here is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockwise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin UI (forms, lists)                      │   │
//! │  │    Products ─ Parties ─ Purchases ─ Sales ─ Vouchers ─ Reports  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw field values                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockwise-forms (OrderForm)                    │   │
//! │  │    parse fields ──► recompute() ──► validate() ──► submit()     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockwise-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │   money   │  │ validation│  │   │
//! │  │   │ LineItem  │  │ Calculator│  │  display  │  │   rules   │  │   │
//! │  │   │ TaxConfig │  │OrderTotals│  │  rounding │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input types (LineItem, OrderDiscount, TaxConfig, statuses)
//! - [`totals`] - The totals calculator and `OrderTotals`
//! - [`money`] - Cent rounding for display and submission
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no cached totals
//! 2. **No I/O**: logging and configuration belong to the form layer
//! 3. **Float Arithmetic, Cent Display**: totals are computed in `f64` and
//!    rounded to cents only when shown or submitted
//! 4. **Explicit Errors**: validation failures are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use stockwise_core::{calculate_totals, LineItem, OrderDiscount, TaxConfig};
//!
//! let items = vec![
//!     LineItem::new(10.0, 750.0, 0.0),
//!     LineItem::new(5.0, 650.0, 0.0),
//! ];
//! let totals = calculate_totals(&items, &OrderDiscount::fixed(500.0), &TaxConfig::new(10.0));
//!
//! assert_eq!(totals.subtotal, 10750.0);
//! assert_eq!(totals.tax_amount, 1025.0);
//! assert_eq!(totals.total, 11275.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use totals::{calculate_totals, calculate_totals_with_policy, OrderTotals, TotalsView};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate applied to a brand-new order form.
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 10.0;

/// Upper bound for every percentage field (line discount, order discount, tax).
pub const MAX_PERCENT: f64 = 100.0;

/// Maximum line items on a single order.
///
/// ## Business Reason
/// Keeps order forms at a size a person can review before submitting.
pub const MAX_LINE_ITEMS: usize = 100;
