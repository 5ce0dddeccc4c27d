//! # stockwise-forms
//!
//! Order form controller for the Stockwise admin UI.
//!
//! ## Module Organization
//! ```text
//! stockwise_forms/
//! ├── lib.rs          ◄─── You are here (logging setup, re-exports)
//! ├── form/           ◄─── OrderForm: field edits, recompute, submit
//! ├── catalog.rs      ◄─── Products offered by the line selector
//! ├── config.rs       ◄─── FormConfig (env / JSON / defaults)
//! ├── samples.rs      ◄─── Sample purchase and sales orders
//! └── error.rs        ◄─── FormError returned to the UI
//! ```
//!
//! ## Example
//! ```rust
//! use stockwise_core::OrderKind;
//! use stockwise_forms::{Catalog, FormConfig, ItemField, OrderForm};
//!
//! let mut form = OrderForm::new(OrderKind::Purchase, &FormConfig::default());
//! form.select_product(0, "1", &Catalog::sample()).unwrap();
//! form.set_item_field(0, ItemField::Quantity, "10").unwrap();
//!
//! assert_eq!(form.totals().subtotal, 7500.0);
//! assert_eq!(form.view().total, "$8250.00");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod samples;

pub use catalog::{Catalog, CatalogProduct};
pub use config::FormConfig;
pub use error::{ErrorCode, FieldError, FormError, FormResult};
pub use form::{ItemField, LineDraft, OrderDraft, OrderForm, OrderSubmission, TotalsDisplay};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every recompute
/// - `RUST_LOG=stockwise_forms=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for stockwise crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockwise_forms=debug"));

    // A subscriber may already be installed (tests, embedding apps).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
