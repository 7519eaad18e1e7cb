use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;

/// Accessory catalog: unit costs and installation requirements by name
#[async_trait]
pub trait AccessoryRepository: Send + Sync {
    /// Catalog unit cost, `None` when the accessory is not listed
    async fn find_unit_cost(&self, name: &str) -> Result<Option<Decimal>>;

    /// Whether installing the accessory incurs fixed overhead
    async fn requires_installation(&self, name: &str) -> Result<Option<bool>>;
}

pub struct MySqlAccessoryRepository {
    pool: MySqlPool,
}

impl MySqlAccessoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessoryRepository for MySqlAccessoryRepository {
    async fn find_unit_cost(&self, name: &str) -> Result<Option<Decimal>> {
        let cost = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT unit_cost
            FROM accessories
            WHERE name = ?
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cost)
    }

    async fn requires_installation(&self, name: &str) -> Result<Option<bool>> {
        let flag = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT requires_installation
            FROM accessories
            WHERE name = ?
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(flag)
    }
}
