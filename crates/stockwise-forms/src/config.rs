//! # Form Configuration
//!
//! Defaults applied to new order forms.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKWISE_*`)
//! 2. JSON config (`FormConfig::from_json`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once a form is created; each form copies what
//! it needs.

use serde::{Deserialize, Serialize};
use stockwise_core::{DiscountPolicy, DiscountType, DEFAULT_TAX_RATE_PERCENT};
use tracing::warn;

use crate::error::{FormError, FormResult};

/// Longest accepted gap between order date and expected delivery.
pub const MAX_LEAD_DAYS: i64 = 3650;

/// Order form configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Tax rate pre-filled on new forms, in percent.
    pub default_tax_rate_percent: f64,

    /// Discount type pre-selected on new forms.
    pub default_discount_type: DiscountType,

    /// Whether the order discount may exceed the subtotal.
    pub discount_policy: DiscountPolicy,

    /// Days between the order date and the default expected delivery date.
    pub expected_lead_days: i64,

    /// Currency symbol used when formatting totals.
    pub currency_symbol: String,
}

impl Default for FormConfig {
    /// ## Default Values
    /// - Tax: 10%
    /// - Discount: percentage, unclamped
    /// - Expected delivery: 10 days out
    /// - Currency: `$`
    fn default() -> Self {
        FormConfig {
            default_tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            default_discount_type: DiscountType::Percentage,
            discount_policy: DiscountPolicy::Unclamped,
            expected_lead_days: 10,
            currency_symbol: "$".to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a FormConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKWISE_TAX_RATE`: default tax rate in percent (e.g., "8.25")
    /// - `STOCKWISE_DISCOUNT_TYPE`: `percentage` or `fixed`
    /// - `STOCKWISE_CLAMP_DISCOUNT`: `true`/`1` caps the discount at the subtotal
    /// - `STOCKWISE_LEAD_DAYS`: expected delivery offset in days (0 to [`MAX_LEAD_DAYS`])
    /// - `STOCKWISE_CURRENCY_SYMBOL`: symbol for formatted totals
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FormConfig::from_env`], reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FormConfig::default();

        if let Some(raw) = lookup("STOCKWISE_TAX_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(rate) if (0.0..=100.0).contains(&rate) => config.default_tax_rate_percent = rate,
                _ => warn!(value = %raw, "Ignoring invalid STOCKWISE_TAX_RATE"),
            }
        }

        if let Some(raw) = lookup("STOCKWISE_DISCOUNT_TYPE") {
            match raw.parse::<DiscountType>() {
                Ok(kind) => config.default_discount_type = kind,
                Err(e) => warn!(error = %e, "Ignoring invalid STOCKWISE_DISCOUNT_TYPE"),
            }
        }

        if let Some(raw) = lookup("STOCKWISE_CLAMP_DISCOUNT") {
            config.discount_policy = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => DiscountPolicy::ClampToSubtotal,
                _ => DiscountPolicy::Unclamped,
            };
        }

        if let Some(raw) = lookup("STOCKWISE_LEAD_DAYS") {
            match raw.trim().parse::<i64>() {
                Ok(days) if (0..=MAX_LEAD_DAYS).contains(&days) => config.expected_lead_days = days,
                _ => warn!(value = %raw, "Ignoring invalid STOCKWISE_LEAD_DAYS"),
            }
        }

        if let Some(symbol) = lookup("STOCKWISE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Parses a JSON config document. Missing keys fall back to defaults.
    ///
    /// Values the environment loader would ignore are rejected here.
    pub fn from_json(json: &str) -> FormResult<Self> {
        let config: FormConfig = serde_json::from_str(json)
            .map_err(|e| FormError::config(format!("Invalid form config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> FormResult<()> {
        if !(0.0..=100.0).contains(&self.default_tax_rate_percent) {
            return Err(FormError::config(format!(
                "defaultTaxRatePercent must be between 0 and 100, got {}",
                self.default_tax_rate_percent
            )));
        }
        if !(0..=MAX_LEAD_DAYS).contains(&self.expected_lead_days) {
            return Err(FormError::config(format!(
                "expectedLeadDays must be between 0 and {}, got {}",
                MAX_LEAD_DAYS, self.expected_lead_days
            )));
        }
        Ok(())
    }
}
