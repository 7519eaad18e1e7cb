//! Cotizador pricing core
//!
//! Quotation line totals and furniture sale-price calculation for the
//! carpentry quotation dashboard.

pub mod config;
pub mod core;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{AppError, Currency, Result};
pub use modules::furniture;
pub use modules::quotations;
