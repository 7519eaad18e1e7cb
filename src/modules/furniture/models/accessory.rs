use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// Fallback unit costs used when the accessory catalog has no price.
// Not confirmed business values; every use is logged at warn level.
pub const DEFAULT_LEGS_COST: Decimal = Decimal::from_parts(2500, 0, 0, false, 2);
pub const DEFAULT_LEG_CLIPS_COST: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
pub const DEFAULT_BRACKETS_COST: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);
pub const DEFAULT_SCREW_KIT_COST: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);
pub const DEFAULT_CIF_COST: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// Accessory positions in a furniture bill of materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorySlot {
    Legs,
    LegClips,
    Brackets,
    ScrewKit,
    /// Catch-all cost-inclusion line
    Cif,
}

impl AccessorySlot {
    pub const ALL: [AccessorySlot; 5] = [
        AccessorySlot::Legs,
        AccessorySlot::LegClips,
        AccessorySlot::Brackets,
        AccessorySlot::ScrewKit,
        AccessorySlot::Cif,
    ];

    /// Key used by the accessory catalog
    pub fn catalog_name(&self) -> &'static str {
        match self {
            AccessorySlot::Legs => "patas",
            AccessorySlot::LegClips => "clip_patas",
            AccessorySlot::Brackets => "mensulas",
            AccessorySlot::ScrewKit => "kit_tornillos",
            AccessorySlot::Cif => "cif",
        }
    }

    /// Unit cost used when the catalog lookup fails or returns nothing
    pub fn default_unit_cost(&self) -> Decimal {
        match self {
            AccessorySlot::Legs => DEFAULT_LEGS_COST,
            AccessorySlot::LegClips => DEFAULT_LEG_CLIPS_COST,
            AccessorySlot::Brackets => DEFAULT_BRACKETS_COST,
            AccessorySlot::ScrewKit => DEFAULT_SCREW_KIT_COST,
            AccessorySlot::Cif => DEFAULT_CIF_COST,
        }
    }
}

impl fmt::Display for AccessorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}
