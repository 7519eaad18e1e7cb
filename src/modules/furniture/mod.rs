// Furniture module: bill-of-materials pricing

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    AccessorySlot, BillOfMaterials, ComponentCost, ComponentKind, MarginConfig, Material,
    MaterialSelection, MaterialSelectionIds, MaterialSlot, PriceBreakdown, ProjectType,
};
pub use repositories::{
    AccessoryRepository, MarginConfigRepository, MaterialRepository, MySqlAccessoryRepository,
    MySqlMarginConfigRepository, MySqlMaterialRepository,
};
pub use services::{FurniturePriceBuilder, FurniturePricingService, PricingCache};
