use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// IVA rate applied to quotations when the business has not configured one
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 16;

/// Pricing settings shared by the calculators
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Quotation tax rate as a percentage (16 means 16%)
    pub default_tax_rate: Decimal,
    /// When false, every price calculation hits the stores directly
    pub cache_enabled: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: Decimal::from(DEFAULT_TAX_RATE_PERCENT),
            cache_enabled: true,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_tax_rate = match env::var("QUOTE_DEFAULT_TAX_RATE") {
            Ok(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
                AppError::Configuration(format!("Invalid QUOTE_DEFAULT_TAX_RATE: {}", raw))
            })?,
            Err(_) => defaults.default_tax_rate,
        };

        let cache_enabled = match env::var("PRICING_CACHE_ENABLED") {
            Ok(raw) => raw.trim().parse::<bool>().map_err(|_| {
                AppError::Configuration(format!("Invalid PRICING_CACHE_ENABLED: {}", raw))
            })?,
            Err(_) => defaults.cache_enabled,
        };

        Ok(Self {
            default_tax_rate,
            cache_enabled,
        })
    }

    /// Tax rate must be non-negative; no upper bound is enforced
    pub fn validate(&self) -> Result<()> {
        if self.default_tax_rate < Decimal::ZERO {
            return Err(AppError::Configuration(format!(
                "Default tax rate cannot be negative, got {}",
                self.default_tax_rate
            )));
        }

        Ok(())
    }
}
