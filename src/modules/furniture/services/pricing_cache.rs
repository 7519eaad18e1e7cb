use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::PricingConfig;
use crate::modules::furniture::models::MarginConfig;

/// Memoized store lookups shared by price builders
///
/// Only resolved values are stored: "not found" answers and fallback
/// defaults are never cached, so catalog additions show up on the next
/// calculation. Concurrent population is harmless because a key always
/// resolves to the same value.
#[derive(Debug)]
pub struct PricingCache {
    enabled: bool,
    margins: DashMap<String, MarginConfig>,
    accessory_costs: DashMap<String, Decimal>,
    installation_flags: DashMap<String, bool>,
}

/// Entry counts per cache, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub margins: usize,
    pub accessory_costs: usize,
    pub installation_flags: usize,
}

impl PricingCache {
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// A cache that never stores anything when `enabled` is false
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            margins: DashMap::new(),
            accessory_costs: DashMap::new(),
            installation_flags: DashMap::new(),
        }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::with_enabled(config.cache_enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn margin(&self, project_type: &str) -> Option<MarginConfig> {
        self.margins.get(project_type).map(|entry| *entry.value())
    }

    pub fn store_margin(&self, project_type: &str, config: MarginConfig) {
        if self.enabled {
            self.margins.insert(project_type.to_string(), config);
        }
    }

    pub fn accessory_cost(&self, name: &str) -> Option<Decimal> {
        self.accessory_costs.get(name).map(|entry| *entry.value())
    }

    pub fn store_accessory_cost(&self, name: &str, cost: Decimal) {
        if self.enabled {
            self.accessory_costs.insert(name.to_string(), cost);
        }
    }

    pub fn installation_flag(&self, name: &str) -> Option<bool> {
        self.installation_flags.get(name).map(|entry| *entry.value())
    }

    pub fn store_installation_flag(&self, name: &str, required: bool) {
        if self.enabled {
            self.installation_flags.insert(name.to_string(), required);
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            margins: self.margins.len(),
            accessory_costs: self.accessory_costs.len(),
            installation_flags: self.installation_flags.len(),
        }
    }

    /// Drop every cached lookup
    pub fn clear(&self) {
        let before = self.stats();
        self.margins.clear();
        self.accessory_costs.clear();
        self.installation_flags.clear();

        info!(
            "Pricing cache cleared ({} margins, {} accessory costs, {} installation flags)",
            before.margins, before.accessory_costs, before.installation_flags
        );
    }
}

impl Default for PricingCache {
    fn default() -> Self {
        Self::new()
    }
}
