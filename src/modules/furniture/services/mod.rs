pub mod price_builder;
pub mod pricing_cache;
pub mod pricing_service;

pub use price_builder::FurniturePriceBuilder;
pub use pricing_cache::{CacheStats, PricingCache};
pub use pricing_service::FurniturePricingService;
