// Furniture price builder behaviour against in-memory stores
//
// Covers material costing, accessory fallback and installation overhead,
// missing margin configurations and cache memoization.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use cotizador::furniture::{
    AccessorySlot, BillOfMaterials, ComponentKind, Material, MaterialSelection, MaterialSlot,
    PricingCache, ProjectType,
};
use helpers::{builder, d, margin, InMemoryAccessories, InMemoryMargins};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn residential(config: cotizador::furniture::MarginConfig) -> Arc<InMemoryMargins> {
    Arc::new(InMemoryMargins::default().with("Residencial", config))
}

fn kitchen_cabinet() -> (BillOfMaterials, MaterialSelection) {
    let bom = BillOfMaterials::new()
        .with_material(MaterialSlot::StructuralBoard, dec!(1.5))
        .with_material(MaterialSlot::VisibleFaceBoard, dec!(0.75))
        .with_material(MaterialSlot::StructuralEdgeBanding, dec!(12))
        .with_material(MaterialSlot::Hinge, dec!(4))
        .with_accessory(AccessorySlot::Legs, dec!(4))
        .with_accessory(AccessorySlot::ScrewKit, dec!(1));

    let selection = MaterialSelection::new()
        .with(
            MaterialSlot::StructuralBoard,
            Material::new(10, "Melamina blanca 16mm", dec!(800)),
        )
        .with(
            MaterialSlot::VisibleFaceBoard,
            Material::new(11, "MDF nogal 16mm", dec!(1200)),
        )
        .with(
            MaterialSlot::StructuralEdgeBanding,
            Material::new(12, "Cubrecanto blanco", dec!(3.5)),
        )
        .with(
            MaterialSlot::Hinge,
            Material::new(13, "Bisagra cierre lento", dec!(45)),
        );

    (bom, selection)
}

#[tokio::test]
async fn test_material_only_reference_price() {
    let builder = builder(
        residential(margin("0", "0", "0.1", "0.3")),
        Arc::new(InMemoryAccessories::default()),
        Arc::new(PricingCache::new()),
    );
    let bom = BillOfMaterials::new().with_material(MaterialSlot::StructuralBoard, dec!(2));
    let selection = MaterialSelection::new().with(
        MaterialSlot::StructuralBoard,
        Material::new(1, "Triplay 15mm", dec!(100)),
    );

    let breakdown = builder
        .build(&bom, &selection, &ProjectType::Residential)
        .await
        .unwrap()
        .expect("residential margins are configured");

    assert_eq!(breakdown.raw_material_cost, dec!(200));
    assert_eq!(breakdown.material_overhead, dec!(20));
    assert_eq!(breakdown.total_cost, dec!(220));
    assert_eq!(breakdown.sale_price, dec!(314.2857143));
}

#[tokio::test]
async fn test_full_cabinet_breakdown() {
    let accessories = InMemoryAccessories::default()
        .with_cost("patas", "20")
        .with_installation("patas", true)
        .with_cost("kit_tornillos", "15")
        .with_installation("kit_tornillos", false);
    let builder = builder(
        residential(margin("0.1", "0.2", "0.15", "0.35")),
        Arc::new(accessories),
        Arc::new(PricingCache::new()),
    );
    let (bom, selection) = kitchen_cabinet();

    let breakdown = builder
        .build(&bom, &selection, &ProjectType::Residential)
        .await
        .unwrap()
        .unwrap();

    // materials: (1200 + 900 + 42 + 180) × 1.1 = 2554.2
    assert_eq!(breakdown.raw_material_cost, dec!(2554.2));
    assert_eq!(breakdown.material_overhead, dec!(383.13));
    // legs 4 × 20 × 1.2 = 96 (+14.4 overhead), screws 15 × 1.2 = 18
    assert_eq!(breakdown.accessory_overhead, dec!(14.4));
    assert_eq!(breakdown.accessory_cost, dec!(128.4));
    assert_eq!(breakdown.fixed_overhead, dec!(397.53));
    assert_eq!(breakdown.total_cost, dec!(3065.73));
    // 3065.73 / 0.65
    assert_eq!(breakdown.sale_price, dec!(4716.507692));

    let kinds: Vec<ComponentKind> = breakdown.components.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::Material(MaterialSlot::StructuralBoard),
            ComponentKind::Material(MaterialSlot::VisibleFaceBoard),
            ComponentKind::Material(MaterialSlot::StructuralEdgeBanding),
            ComponentKind::Material(MaterialSlot::Hinge),
            ComponentKind::Accessory(AccessorySlot::Legs),
            ComponentKind::Accessory(AccessorySlot::ScrewKit),
        ]
    );
}

#[tokio::test]
async fn test_missing_margin_config_cannot_price() {
    let margins = residential(margin("0", "0", "0.1", "0.3"));
    let builder = builder(
        margins.clone(),
        Arc::new(InMemoryAccessories::default()),
        Arc::new(PricingCache::new()),
    );
    let (bom, selection) = kitchen_cabinet();

    let result = builder
        .build(&bom, &selection, &"Hotelero".parse::<ProjectType>().unwrap())
        .await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(margins.call_count(), 1);
}

#[tokio::test]
async fn test_catalog_failure_falls_back_to_defaults() {
    let builder = builder(
        residential(margin("0", "0", "0.5", "0")),
        Arc::new(InMemoryAccessories::default().failing()),
        Arc::new(PricingCache::new()),
    );
    let bom = BillOfMaterials::new()
        .with_accessory(AccessorySlot::Legs, dec!(4))
        .with_accessory(AccessorySlot::LegClips, dec!(4));

    let breakdown = builder
        .build(&bom, &MaterialSelection::new(), &ProjectType::Residential)
        .await
        .unwrap()
        .unwrap();

    assert!(breakdown.used_fallback_costs());
    // installation unknown → no overhead even at 50%
    assert_eq!(breakdown.accessory_overhead, Decimal::ZERO);
    assert_eq!(
        breakdown.accessory_cost,
        dec!(4) * AccessorySlot::Legs.default_unit_cost()
            + dec!(4) * AccessorySlot::LegClips.default_unit_cost()
    );
    assert_eq!(builder.cache().stats().accessory_costs, 0);
}

#[tokio::test]
async fn test_lookups_are_memoized_until_cleared() {
    let margins = residential(margin("0", "0", "0.1", "0.3"));
    let accessories = Arc::new(
        InMemoryAccessories::default()
            .with_cost("patas", "20")
            .with_installation("patas", true),
    );
    let builder = builder(
        margins.clone(),
        accessories.clone(),
        Arc::new(PricingCache::new()),
    );
    let bom = BillOfMaterials::new().with_accessory(AccessorySlot::Legs, dec!(4));

    for _ in 0..3 {
        builder
            .build(&bom, &MaterialSelection::new(), &ProjectType::Residential)
            .await
            .unwrap();
    }
    assert_eq!(margins.call_count(), 1);
    assert_eq!(accessories.cost_call_count(), 1);
    assert_eq!(accessories.installation_call_count(), 1);

    builder.clear_cache();
    builder
        .build(&bom, &MaterialSelection::new(), &ProjectType::Residential)
        .await
        .unwrap();
    assert_eq!(margins.call_count(), 2);
    assert_eq!(accessories.cost_call_count(), 2);
}

#[tokio::test]
async fn test_disabled_cache_always_queries_stores() {
    let margins = residential(margin("0", "0", "0", "0"));
    let builder = builder(
        margins.clone(),
        Arc::new(InMemoryAccessories::default()),
        Arc::new(PricingCache::with_enabled(false)),
    );

    for _ in 0..2 {
        builder
            .build(
                &BillOfMaterials::new(),
                &MaterialSelection::new(),
                &ProjectType::Residential,
            )
            .await
            .unwrap();
    }
    assert_eq!(margins.call_count(), 2);
}

proptest! {
    #[test]
    fn test_installation_flag_controls_accessory_overhead(
        quantity in 1u32..=50,
        cost in 1u32..=2_000,
        overhead_pct in 0u32..=40,
        installed in any::<bool>(),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let overhead_rate = Decimal::from(overhead_pct) / dec!(100);

        let breakdown = runtime.block_on(async {
            let accessories = InMemoryAccessories::default()
                .with_cost("mensulas", &cost.to_string())
                .with_installation("mensulas", installed);
            let builder = builder(
                Arc::new(InMemoryMargins::default().with("Comercial", cotizador::furniture::MarginConfig {
                    material_margin: Decimal::ZERO,
                    accessory_margin: Decimal::ZERO,
                    fixed_overhead_rate: overhead_rate,
                    sale_margin: Decimal::ZERO,
                })),
                Arc::new(accessories),
                Arc::new(PricingCache::new()),
            );
            let bom = BillOfMaterials::new().with_accessory(AccessorySlot::Brackets, Decimal::from(quantity));
            builder
                .build(&bom, &MaterialSelection::new(), &ProjectType::Commercial)
                .await
                .unwrap()
                .unwrap()
        });

        let component_cost = Decimal::from(quantity) * Decimal::from(cost);
        let expected_overhead = if installed {
            component_cost * overhead_rate
        } else {
            Decimal::ZERO
        };

        prop_assert_eq!(breakdown.accessory_overhead, expected_overhead);
        prop_assert_eq!(breakdown.accessory_cost, component_cost + expected_overhead);
        prop_assert_eq!(breakdown.components[0].overhead, expected_overhead);
    }
}

#[test]
fn test_margin_helper_matches_d() {
    assert_eq!(margin("0.1", "0", "0", "0").material_margin, d("0.1"));
}
