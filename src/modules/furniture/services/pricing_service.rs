use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::core::Result;
use crate::modules::furniture::models::{
    BillOfMaterials, Material, MaterialSelection, MaterialSelectionIds, PriceBreakdown,
    ProjectType,
};
use crate::modules::furniture::repositories::MaterialRepository;

use super::price_builder::FurniturePriceBuilder;

/// Prices furniture items from material ids as chosen in the quotation form
pub struct FurniturePricingService {
    materials: Arc<dyn MaterialRepository>,
    builder: FurniturePriceBuilder,
}

impl FurniturePricingService {
    pub fn new(materials: Arc<dyn MaterialRepository>, builder: FurniturePriceBuilder) -> Self {
        Self { materials, builder }
    }

    pub fn builder(&self) -> &FurniturePriceBuilder {
        &self.builder
    }

    /// Resolve selected material ids into materials with unit costs
    ///
    /// Ids missing from the catalog leave their slot unresolved, which the
    /// builder then skips.
    pub async fn resolve_selection(&self, ids: &MaterialSelectionIds) -> Result<MaterialSelection> {
        let mut unique: Vec<i64> = ids.values().copied().collect();
        unique.sort_unstable();
        unique.dedup();

        let found: HashMap<i64, Material> = self
            .materials
            .find_by_ids(&unique)
            .await?
            .into_iter()
            .map(|material| (material.id, material))
            .collect();

        let mut selection = MaterialSelection::new();
        for (&slot, id) in ids {
            match found.get(id) {
                Some(material) => {
                    selection.materials.insert(slot, material.clone());
                }
                None => warn!("Material {} selected for slot {} not found", id, slot),
            }
        }

        Ok(selection)
    }

    /// Resolve the selection and price the item
    ///
    /// `Ok(None)` when the project type has no margin configuration.
    pub async fn price_item(
        &self,
        bom: &BillOfMaterials,
        selection_ids: &MaterialSelectionIds,
        project_type: &ProjectType,
    ) -> Result<Option<PriceBreakdown>> {
        let selection = self.resolve_selection(selection_ids).await?;
        self.builder.build(bom, &selection, project_type).await
    }
}
