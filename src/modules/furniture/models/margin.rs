use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::core::{AppError, Result};

/// Margin rates for one project type, all expressed as fractions (0.3 = 30%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MarginConfig {
    /// Applied multiplicatively to raw-material cost
    pub material_margin: Decimal,

    /// Applied multiplicatively to accessory cost
    pub accessory_margin: Decimal,

    /// Gastos fijos: always on materials, on accessories only when installed
    pub fixed_overhead_rate: Decimal,

    /// Margen de venta: sale price = cost / (1 − sale_margin)
    pub sale_margin: Decimal,
}

impl MarginConfig {
    /// Rates must be non-negative and the sale margin strictly below 1
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("material_margin", self.material_margin),
            ("accessory_margin", self.accessory_margin),
            ("fixed_overhead_rate", self.fixed_overhead_rate),
            ("sale_margin", self.sale_margin),
        ];

        for (name, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "{} cannot be negative, got {}",
                    name, rate
                )));
            }
        }

        if self.sale_margin >= Decimal::ONE {
            return Err(AppError::validation(format!(
                "sale_margin must be below 1, got {}",
                self.sale_margin
            )));
        }

        Ok(())
    }
}

/// Project types with their own margin configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Developer,
    Institutional,
    /// Any other label stored in the margin table
    Custom(String),
}

impl ProjectType {
    /// Key used by the margin configuration store
    pub fn label(&self) -> &str {
        match self {
            ProjectType::Residential => "Residencial",
            ProjectType::Commercial => "Comercial",
            ProjectType::Developer => "Desarrolladora",
            ProjectType::Institutional => "Institucional",
            ProjectType::Custom(label) => label,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Project type cannot be empty"));
        }

        Ok(match trimmed.to_lowercase().as_str() {
            "residencial" | "residential" => ProjectType::Residential,
            "comercial" | "commercial" => ProjectType::Commercial,
            "desarrolladora" | "developer" => ProjectType::Developer,
            "institucional" | "institutional" => ProjectType::Institutional,
            _ => ProjectType::Custom(trimmed.to_string()),
        })
    }
}
