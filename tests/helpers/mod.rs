// In-memory store doubles for pricing tests.
//
// Each store counts how often it is queried so tests can check cache hits.
// Included from test targets with `#[path = "../helpers/mod.rs"] mod helpers;`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use cotizador::core::{AppError, Result};
use cotizador::furniture::{
    AccessoryRepository, FurniturePriceBuilder, MarginConfig, MarginConfigRepository, Material,
    MaterialRepository, PricingCache,
};

pub fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn margin(material: &str, accessory: &str, overhead: &str, sale: &str) -> MarginConfig {
    MarginConfig {
        material_margin: d(material),
        accessory_margin: d(accessory),
        fixed_overhead_rate: d(overhead),
        sale_margin: d(sale),
    }
}

#[derive(Default)]
pub struct InMemoryMargins {
    configs: HashMap<String, MarginConfig>,
    pub calls: AtomicUsize,
}

impl InMemoryMargins {
    pub fn with(mut self, project_type: &str, config: MarginConfig) -> Self {
        self.configs.insert(project_type.to_string(), config);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarginConfigRepository for InMemoryMargins {
    async fn find_by_project_type(&self, project_type: &str) -> Result<Option<MarginConfig>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.configs.get(project_type).copied())
    }
}

#[derive(Default)]
pub struct InMemoryAccessories {
    costs: HashMap<String, Decimal>,
    installed: HashMap<String, bool>,
    failing: bool,
    delay: Option<Duration>,
    pub cost_calls: AtomicUsize,
    pub installation_calls: AtomicUsize,
}

impl InMemoryAccessories {
    pub fn with_cost(mut self, name: &str, cost: &str) -> Self {
        self.costs.insert(name.to_string(), d(cost));
        self
    }

    pub fn with_installation(mut self, name: &str, required: bool) -> Self {
        self.installed.insert(name.to_string(), required);
        self
    }

    /// Every lookup returns a database-style error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every lookup sleeps before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn cost_call_count(&self) -> usize {
        self.cost_calls.load(Ordering::SeqCst)
    }

    pub fn installation_call_count(&self) -> usize {
        self.installation_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AccessoryRepository for InMemoryAccessories {
    async fn find_unit_cost(&self, name: &str) -> Result<Option<Decimal>> {
        self.cost_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.failing {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.costs.get(name).copied())
    }

    async fn requires_installation(&self, name: &str) -> Result<Option<bool>> {
        self.installation_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.failing {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.installed.get(name).copied())
    }
}

#[derive(Default)]
pub struct InMemoryMaterials {
    materials: HashMap<i64, Material>,
    pub calls: AtomicUsize,
}

impl InMemoryMaterials {
    pub fn with(mut self, id: i64, name: &str, unit_cost: &str) -> Self {
        self.materials.insert(id, Material::new(id, name, d(unit_cost)));
        self
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterials {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Material>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ids
            .iter()
            .filter_map(|id| self.materials.get(id).cloned())
            .collect())
    }
}

pub fn builder(
    margins: Arc<InMemoryMargins>,
    accessories: Arc<InMemoryAccessories>,
    cache: Arc<PricingCache>,
) -> FurniturePriceBuilder {
    FurniturePriceBuilder::new(margins, accessories, cache)
}
