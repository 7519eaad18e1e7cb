use std::sync::Arc;

use futures_util::future::{join, join_all};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::core::{precision, AppError, Result};
use crate::modules::furniture::models::{
    AccessorySlot, BillOfMaterials, ComponentCost, ComponentKind, MarginConfig, MaterialSelection,
    MaterialSlot, PriceBreakdown, ProjectType,
};
use crate::modules::furniture::repositories::{AccessoryRepository, MarginConfigRepository};

use super::pricing_cache::PricingCache;

/// Prices a furniture item from its bill of materials and project-type margins
///
/// Steps:
/// 1. material cost per slot = quantity × unit cost × (1 + material margin)
/// 2. accessory cost per slot = quantity × unit cost × (1 + accessory margin),
///    plus fixed overhead on that cost when the accessory requires installation
/// 3. material overhead = raw material cost × fixed overhead rate
/// 4. sale price = (materials + material overhead + accessories) / (1 − sale margin)
pub struct FurniturePriceBuilder {
    margins: Arc<dyn MarginConfigRepository>,
    accessories: Arc<dyn AccessoryRepository>,
    cache: Arc<PricingCache>,
}

impl FurniturePriceBuilder {
    pub fn new(
        margins: Arc<dyn MarginConfigRepository>,
        accessories: Arc<dyn AccessoryRepository>,
        cache: Arc<PricingCache>,
    ) -> Self {
        Self {
            margins,
            accessories,
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<PricingCache> {
        &self.cache
    }

    /// Forget all memoized margin and accessory lookups
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Margin configuration for a project type, validated
    ///
    /// `Ok(None)` when the store has no configuration for the type.
    pub async fn margin_for(&self, project_type: &ProjectType) -> Result<Option<MarginConfig>> {
        let label = project_type.label();

        if let Some(config) = self.cache.margin(label) {
            return Ok(Some(config));
        }

        let Some(config) = self.margins.find_by_project_type(label).await? else {
            return Ok(None);
        };

        config.validate().map_err(|e| {
            AppError::validation(format!(
                "Invalid margin configuration for project type '{}': {}",
                label, e
            ))
        })?;

        self.cache.store_margin(label, config);
        Ok(Some(config))
    }

    /// Catalog unit cost, or the slot default when the lookup fails or is empty
    ///
    /// Returns the cost and whether the default was used.
    async fn accessory_unit_cost(&self, slot: AccessorySlot) -> (Decimal, bool) {
        let name = slot.catalog_name();

        if let Some(cost) = self.cache.accessory_cost(name) {
            return (cost, false);
        }

        match self.accessories.find_unit_cost(name).await {
            Ok(Some(cost)) => {
                self.cache.store_accessory_cost(name, cost);
                (cost, false)
            }
            Ok(None) => {
                let fallback = slot.default_unit_cost();
                warn!(
                    "Accessory '{}' not found in catalog, using default unit cost {}",
                    name, fallback
                );
                (fallback, true)
            }
            Err(e) => {
                let fallback = slot.default_unit_cost();
                warn!(
                    "Accessory cost lookup for '{}' failed ({}), using default unit cost {}",
                    name, e, fallback
                );
                (fallback, true)
            }
        }
    }

    /// Installation requirement, `false` when unresolved
    async fn requires_installation(&self, slot: AccessorySlot) -> bool {
        let name = slot.catalog_name();

        if let Some(required) = self.cache.installation_flag(name) {
            return required;
        }

        match self.accessories.requires_installation(name).await {
            Ok(Some(required)) => {
                self.cache.store_installation_flag(name, required);
                required
            }
            Ok(None) => {
                debug!("No installation flag for accessory '{}', assuming none", name);
                false
            }
            Err(e) => {
                warn!(
                    "Installation lookup for '{}' failed ({}), assuming none",
                    name, e
                );
                false
            }
        }
    }

    async fn price_accessory(
        &self,
        slot: AccessorySlot,
        quantity: Decimal,
        margin: &MarginConfig,
    ) -> Result<ComponentCost> {
        let ((unit_cost, used_fallback), installed) =
            join(self.accessory_unit_cost(slot), self.requires_installation(slot)).await;

        let name = slot.catalog_name();
        let multiplier = in_range(precision::add(Decimal::ONE, margin.accessory_margin), name)?;
        let base = in_range(precision::mul(quantity, unit_cost), name)?;
        let cost = in_range(precision::mul(base, multiplier), name)?;
        let overhead = if installed {
            in_range(precision::mul(cost, margin.fixed_overhead_rate), name)?
        } else {
            Decimal::ZERO
        };

        Ok(ComponentCost {
            kind: ComponentKind::Accessory(slot),
            name: name.to_string(),
            quantity,
            unit_cost,
            cost,
            overhead,
            used_fallback,
        })
    }

    fn price_materials(
        bom: &BillOfMaterials,
        selection: &MaterialSelection,
        margin: &MarginConfig,
    ) -> Result<Vec<ComponentCost>> {
        let multiplier = in_range(
            precision::add(Decimal::ONE, margin.material_margin),
            "material margin",
        )?;

        MaterialSlot::ALL
            .iter()
            .filter_map(|&slot| {
                let quantity = bom.material_quantity(slot)?;
                let material = selection.get(slot)?;
                Some((slot, quantity, material))
            })
            .map(|(slot, quantity, material)| -> Result<ComponentCost> {
                let cost = precision::mul(quantity, material.unit_cost)
                    .and_then(|base| precision::mul(base, multiplier));

                Ok(ComponentCost {
                    kind: ComponentKind::Material(slot),
                    name: material.name.clone(),
                    quantity,
                    unit_cost: material.unit_cost,
                    cost: in_range(cost, slot.as_str())?,
                    overhead: Decimal::ZERO,
                    used_fallback: false,
                })
            })
            .collect()
    }

    /// Price one furniture item
    ///
    /// # Returns
    /// * `Ok(Some(breakdown))` - priced item
    /// * `Ok(None)` - no margin configuration for `project_type`; do not show a price
    ///
    /// # Errors
    /// Margin store failures, invalid margin configurations and amounts that
    /// overflow the decimal range. Accessory lookup failures never error;
    /// they fall back to slot defaults.
    pub async fn build(
        &self,
        bom: &BillOfMaterials,
        selection: &MaterialSelection,
        project_type: &ProjectType,
    ) -> Result<Option<PriceBreakdown>> {
        let Some(margin) = self.margin_for(project_type).await? else {
            warn!(
                "No margin configuration for project type '{}', item cannot be priced",
                project_type
            );
            return Ok(None);
        };

        let mut components = Self::price_materials(bom, selection, &margin)?;
        let raw_material_cost = in_range(
            precision::sum(components.iter().map(|c| c.cost)),
            "raw material cost",
        )?;

        // Lookups run concurrently; results keep AccessorySlot::ALL order
        let accessories = join_all(AccessorySlot::ALL.iter().filter_map(|&slot| {
            let quantity = bom.accessory_quantity(slot);
            (quantity > Decimal::ZERO).then(|| self.price_accessory(slot, quantity, &margin))
        }))
        .await
        .into_iter()
        .collect::<Result<Vec<ComponentCost>>>()?;

        // One exact sum over every cost and overhead, rounded once
        let accessory_cost = in_range(
            precision::sum(accessories.iter().flat_map(|c| [c.cost, c.overhead])),
            "accessory cost",
        )?;
        let accessory_overhead = in_range(
            precision::sum(accessories.iter().map(|c| c.overhead)),
            "accessory overhead",
        )?;
        components.extend(accessories);

        let material_overhead = in_range(
            precision::mul(raw_material_cost, margin.fixed_overhead_rate),
            "material overhead",
        )?;
        let total_cost = in_range(
            precision::sum([raw_material_cost, material_overhead, accessory_cost]),
            "total cost",
        )?;
        let fixed_overhead = in_range(
            precision::add(material_overhead, accessory_overhead),
            "fixed overhead",
        )?;

        let divisor = in_range(precision::sub(Decimal::ONE, margin.sale_margin), "sale margin")?;
        let sale_price = precision::div(total_cost, divisor).ok_or_else(|| {
            AppError::validation(format!(
                "Sale margin {} leaves nothing to divide by",
                margin.sale_margin
            ))
        })?;

        info!(
            "Priced {} item: materials {}, overhead {}, accessories {}, sale price {}",
            project_type, raw_material_cost, material_overhead, accessory_cost, sale_price
        );

        Ok(Some(PriceBreakdown {
            raw_material_cost,
            material_overhead,
            accessory_cost,
            accessory_overhead,
            fixed_overhead,
            total_cost,
            sale_price,
            components,
        }))
    }
}

fn in_range(value: Option<Decimal>, what: &str) -> Result<Decimal> {
    value.ok_or_else(|| {
        AppError::validation(format!(
            "Price of {} exceeds the supported decimal range",
            what
        ))
    })
}
