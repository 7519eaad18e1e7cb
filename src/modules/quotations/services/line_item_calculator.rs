use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::core::{precision, AppError, Result};
use crate::modules::quotations::models::{
    CalculatedLine, QuotationLineInput, QuotationSummary, QuotationTotals,
};

/// Computes quotation line subtotals and the subtotal/taxes/total roll-up
///
/// Pure: no I/O, no range validation. Inputs outside the documented ranges
/// are the caller's responsibility (see `QuotationLineInput::new`). The only
/// error is an amount too large for `Decimal`.
#[derive(Debug, Clone)]
pub struct LineItemCalculator {
    default_tax_rate: Decimal,
}

impl LineItemCalculator {
    pub fn new() -> Self {
        Self::with_default_tax_rate(PricingConfig::default().default_tax_rate)
    }

    pub fn with_default_tax_rate(default_tax_rate: Decimal) -> Self {
        Self { default_tax_rate }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::with_default_tax_rate(config.default_tax_rate)
    }

    pub fn default_tax_rate(&self) -> Decimal {
        self.default_tax_rate
    }

    /// Subtotal of a single line
    ///
    /// Formula: (quantity × unit_price) − (quantity × unit_price × discount / 100)
    pub fn line_subtotal(&self, input: &QuotationLineInput) -> Result<Decimal> {
        let gross = precision::mul(input.quantity, input.unit_price)
            .ok_or_else(|| out_of_range("Line amount", input.quantity, input.unit_price))?;
        let discount = precision::percent_of(gross, input.discount)
            .ok_or_else(|| out_of_range("Line discount", gross, input.discount))?;
        precision::sub(gross, discount)
            .ok_or_else(|| out_of_range("Line subtotal", gross, discount))
    }

    /// Totals for an already-summed subtotal
    pub fn totals(&self, subtotal: Decimal, tax_rate: Decimal) -> Result<QuotationTotals> {
        let taxes = precision::percent_of(subtotal, tax_rate)
            .ok_or_else(|| out_of_range("Taxes", subtotal, tax_rate))?;
        let total = precision::add(subtotal, taxes)
            .ok_or_else(|| out_of_range("Total", subtotal, taxes))?;

        Ok(QuotationTotals {
            subtotal,
            tax_rate,
            taxes,
            total,
        })
    }

    /// Calculate every line and the quotation totals at `tax_rate` percent
    ///
    /// # Errors
    /// `AppError::Validation` when an amount overflows the decimal range.
    pub fn calculate(
        &self,
        lines: &[QuotationLineInput],
        tax_rate: Decimal,
    ) -> Result<QuotationSummary> {
        let lines = lines
            .iter()
            .map(|input| -> Result<CalculatedLine> {
                Ok(CalculatedLine {
                    subtotal: self.line_subtotal(input)?,
                    input: input.clone(),
                })
            })
            .collect::<Result<Vec<CalculatedLine>>>()?;

        let subtotal = precision::sum(lines.iter().map(|line| line.subtotal)).ok_or_else(|| {
            AppError::validation("Quotation subtotal exceeds the supported decimal range")
        })?;
        let totals = self.totals(subtotal, tax_rate)?;

        debug!(
            "Calculated quotation: {} lines, subtotal {}, taxes {} at {}%, total {}",
            lines.len(),
            totals.subtotal,
            totals.taxes,
            totals.tax_rate,
            totals.total
        );

        Ok(QuotationSummary { lines, totals })
    }

    /// Same as `calculate` using the configured default tax rate
    pub fn calculate_with_default(&self, lines: &[QuotationLineInput]) -> Result<QuotationSummary> {
        self.calculate(lines, self.default_tax_rate)
    }
}

fn out_of_range(what: &str, a: Decimal, b: Decimal) -> AppError {
    AppError::validation(format!(
        "{} from {} and {} exceeds the supported decimal range",
        what, a, b
    ))
}

impl Default for LineItemCalculator {
    fn default() -> Self {
        Self::new()
    }
}
