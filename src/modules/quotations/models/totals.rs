use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::CalculatedLine;
use crate::core::Currency;

/// Quotation-level money roll-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationTotals {
    /// Sum of line subtotals
    pub subtotal: Decimal,

    /// Tax rate as a percentage (16 means 16%)
    pub tax_rate: Decimal,

    /// subtotal × tax_rate / 100
    pub taxes: Decimal,

    /// subtotal + taxes
    pub total: Decimal,
}

/// Calculated lines plus their totals, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationSummary {
    pub lines: Vec<CalculatedLine>,
    pub totals: QuotationTotals,
}

/// Totals rendered for a quotation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    pub subtotal: String,
    pub taxes: String,
    pub total: String,
}

impl QuotationTotals {
    /// Round to the currency's display scale and format
    pub fn format(&self, currency: Currency) -> FormattedTotals {
        FormattedTotals {
            subtotal: currency.format_amount(self.subtotal),
            taxes: currency.format_amount(self.taxes),
            total: currency.format_amount(self.total),
        }
    }
}
