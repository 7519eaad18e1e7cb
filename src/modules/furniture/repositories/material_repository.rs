use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::furniture::models::Material;

/// Materials catalog
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Materials for the given ids; unknown ids are simply absent
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Material>>;
}

pub struct MySqlMaterialRepository {
    pool: MySqlPool,
}

impl MySqlMaterialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for MySqlMaterialRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Material>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT id, name, unit_cost FROM materials WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let materials = query
            .build_query_as::<Material>()
            .fetch_all(&self.pool)
            .await?;

        Ok(materials)
    }
}
