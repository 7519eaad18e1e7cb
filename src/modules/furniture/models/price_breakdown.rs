use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accessory::AccessorySlot;
use super::material::MaterialSlot;

/// Which bill-of-materials slot a cost line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slot", rename_all = "snake_case")]
pub enum ComponentKind {
    Material(MaterialSlot),
    Accessory(AccessorySlot),
}

/// One itemized cost line of a furniture price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCost {
    pub kind: ComponentKind,
    /// Material name or accessory catalog name
    pub name: String,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    /// quantity × unit_cost × (1 + margin)
    pub cost: Decimal,
    /// Fixed overhead charged on this line (accessories only)
    pub overhead: Decimal,
    /// True when `unit_cost` is a hardcoded default instead of a catalog price
    pub used_fallback: bool,
}

/// Result of pricing one furniture item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Σ material component costs, margin included
    pub raw_material_cost: Decimal,
    /// raw_material_cost × fixed_overhead_rate
    pub material_overhead: Decimal,
    /// Σ accessory costs with margin plus their installation overhead
    pub accessory_cost: Decimal,
    /// Installation overhead part of `accessory_cost`
    pub accessory_overhead: Decimal,
    /// material_overhead + accessory_overhead
    pub fixed_overhead: Decimal,
    /// raw_material_cost + material_overhead + accessory_cost
    pub total_cost: Decimal,
    /// total_cost / (1 − sale_margin)
    pub sale_price: Decimal,
    pub components: Vec<ComponentCost>,
}

impl PriceBreakdown {
    /// True when any accessory was priced from a fallback default
    pub fn used_fallback_costs(&self) -> bool {
        self.components.iter().any(|c| c.used_fallback)
    }
}
