pub mod currency;
pub mod error;
pub mod precision;

pub use currency::Currency;
pub use error::{AppError, Result};
