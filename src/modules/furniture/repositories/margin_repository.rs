use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::furniture::models::MarginConfig;

/// Margin configuration store, keyed by project-type label
#[async_trait]
pub trait MarginConfigRepository: Send + Sync {
    /// Margins for a project type, `None` when the type has no configuration
    async fn find_by_project_type(&self, project_type: &str) -> Result<Option<MarginConfig>>;
}

pub struct MySqlMarginConfigRepository {
    pool: MySqlPool,
}

impl MySqlMarginConfigRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarginConfigRepository for MySqlMarginConfigRepository {
    async fn find_by_project_type(&self, project_type: &str) -> Result<Option<MarginConfig>> {
        let config = sqlx::query_as::<_, MarginConfig>(
            r#"
            SELECT material_margin, accessory_margin, fixed_overhead_rate, sale_margin
            FROM margin_configs
            WHERE project_type = ?
            LIMIT 1
            "#,
        )
        .bind(project_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }
}
