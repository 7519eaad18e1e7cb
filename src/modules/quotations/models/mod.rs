mod line_item;
mod totals;

pub use line_item::{CalculatedLine, QuotationLineInput};
pub use totals::{FormattedTotals, QuotationSummary, QuotationTotals};
