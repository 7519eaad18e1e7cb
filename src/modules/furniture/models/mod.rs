mod accessory;
mod bill_of_materials;
mod margin;
mod material;
mod price_breakdown;

pub use accessory::{
    AccessorySlot, DEFAULT_BRACKETS_COST, DEFAULT_CIF_COST, DEFAULT_LEGS_COST,
    DEFAULT_LEG_CLIPS_COST, DEFAULT_SCREW_KIT_COST,
};
pub use bill_of_materials::{BillOfMaterials, MaterialSelection, MaterialSelectionIds};
pub use margin::{MarginConfig, ProjectType};
pub use material::{Material, MaterialSlot};
pub use price_breakdown::{ComponentCost, ComponentKind, PriceBreakdown};
