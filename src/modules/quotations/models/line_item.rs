// A quotation line: quantity × unit price with a percentage discount.
//
// Validation lives in the constructor only. The calculator accepts any
// values so callers that bypass `new` get numerically odd results or an
// overflow error, never a panic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Raw inputs for one quotation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationLineInput {
    /// Free-text description shown on the quotation
    #[serde(default)]
    pub description: Option<String>,

    /// Units quoted (must be positive)
    pub quantity: Decimal,

    /// Price per unit (must be non-negative)
    pub unit_price: Decimal,

    /// Discount percentage, 0 to 100
    #[serde(default)]
    pub discount: Decimal,
}

impl QuotationLineInput {
    /// Create a validated line input
    ///
    /// # Arguments
    /// * `quantity` - Must be greater than zero
    /// * `unit_price` - Must be non-negative
    /// * `discount` - Percentage in the closed range 0..=100
    pub fn new(quantity: Decimal, unit_price: Decimal, discount: Decimal) -> Result<Self> {
        let input = Self {
            description: None,
            quantity,
            unit_price,
            discount,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the ranges accepted by `new`
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                self.quantity
            )));
        }

        if self.unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                self.unit_price
            )));
        }

        if self.discount < Decimal::ZERO || self.discount > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(format!(
                "Discount must be between 0 and 100, got: {}",
                self.discount
            )));
        }

        if self.quantity.checked_mul(self.unit_price).is_none() {
            return Err(AppError::validation(format!(
                "Quantity {} × unit price {} exceeds the supported decimal range",
                self.quantity, self.unit_price
            )));
        }

        Ok(())
    }
}

/// A line input together with its computed subtotal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedLine {
    pub input: QuotationLineInput,

    /// quantity × unit_price − discount
    pub subtotal: Decimal,
}
