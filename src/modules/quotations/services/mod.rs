pub mod line_item_calculator;

pub use line_item_calculator::LineItemCalculator;
