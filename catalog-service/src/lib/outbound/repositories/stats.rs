use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::stats::errors::StatsError;
use crate::domain::stats::models::CatalogStats;
use crate::domain::stats::models::CategoryCounts;
use crate::domain::stats::ports::StatsRepository;

pub struct SqliteStatsRepository {
    pool: SqlitePool,
}

impl SqliteStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn grouped_counts(&self, sql: &str) -> Result<BTreeMap<String, i64>, StatsError> {
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let key: String = row.try_get(0).map_err(db_err)?;
            let count: i64 = row.try_get(1).map_err(db_err)?;
            counts.insert(key, count);
        }

        Ok(counts)
    }
}

fn db_err(e: sqlx::Error) -> StatsError {
    StatsError::DatabaseError(e.to_string())
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn category_counts(&self) -> Result<CategoryCounts, StatsError> {
        let ingredient_categories = self
            .grouped_counts("SELECT category, COUNT(*) FROM ingredients GROUP BY category")
            .await?;
        let recipe_categories = self
            .grouped_counts("SELECT category, COUNT(*) FROM recipes GROUP BY category")
            .await?;

        Ok(CategoryCounts {
            ingredient_categories,
            recipe_categories,
        })
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, StatsError> {
        let total_ingredients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let total_recipes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        // AVG over an empty table is NULL.
        let avg_prep_time: Option<f64> =
            sqlx::query_scalar("SELECT AVG(prep_time_minutes) FROM recipes")
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;

        let avg_cook_time: Option<f64> =
            sqlx::query_scalar("SELECT AVG(cook_time_minutes) FROM recipes")
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;

        let difficulty_distribution = self
            .grouped_counts("SELECT difficulty, COUNT(*) FROM recipes GROUP BY difficulty")
            .await?;

        Ok(CatalogStats {
            total_ingredients,
            total_recipes,
            avg_prep_time: avg_prep_time.unwrap_or(0.0),
            avg_cook_time: avg_cook_time.unwrap_or(0.0),
            difficulty_distribution,
        })
    }
}
