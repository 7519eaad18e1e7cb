// Quotations module: line subtotals and quotation totals

pub mod models;
pub mod services;

pub use models::{CalculatedLine, QuotationLineInput, QuotationSummary, QuotationTotals};
pub use services::LineItemCalculator;
