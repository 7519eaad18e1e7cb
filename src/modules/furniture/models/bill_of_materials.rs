use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accessory::AccessorySlot;
use super::material::{Material, MaterialSlot};

/// Quantities consumed by one furniture item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Quantity per material slot; absent slots are not priced
    #[serde(default)]
    pub materials: BTreeMap<MaterialSlot, Decimal>,

    /// Quantity per accessory slot; zero or absent slots are not priced
    #[serde(default)]
    pub accessories: BTreeMap<AccessorySlot, Decimal>,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_material(mut self, slot: MaterialSlot, quantity: Decimal) -> Self {
        self.materials.insert(slot, quantity);
        self
    }

    pub fn with_accessory(mut self, slot: AccessorySlot, quantity: Decimal) -> Self {
        self.accessories.insert(slot, quantity);
        self
    }

    pub fn material_quantity(&self, slot: MaterialSlot) -> Option<Decimal> {
        self.materials.get(&slot).copied()
    }

    /// Accessory quantity, zero when the slot is absent
    pub fn accessory_quantity(&self, slot: AccessorySlot) -> Decimal {
        self.accessories.get(&slot).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Materials chosen for each slot, already resolved with unit costs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSelection {
    #[serde(default)]
    pub materials: BTreeMap<MaterialSlot, Material>,
}

impl MaterialSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: MaterialSlot, material: Material) -> Self {
        self.materials.insert(slot, material);
        self
    }

    pub fn get(&self, slot: MaterialSlot) -> Option<&Material> {
        self.materials.get(&slot)
    }
}

/// Material ids chosen for each slot, before resolution
pub type MaterialSelectionIds = BTreeMap<MaterialSlot, i64>;
