use async_trait::async_trait;

use crate::domain::stats::errors::StatsError;
use crate::domain::stats::models::CatalogStats;
use crate::domain::stats::models::CategoryCounts;

/// Port for catalog statistics.
#[async_trait]
pub trait StatsServicePort: Send + Sync + 'static {
    /// Per-category row counts for ingredients and recipes.
    async fn category_counts(&self) -> Result<CategoryCounts, StatsError>;

    /// Aggregate statistics over the catalog.
    async fn catalog_stats(&self) -> Result<CatalogStats, StatsError>;
}

/// Persistence operations behind the stats service.
#[async_trait]
pub trait StatsRepository: Send + Sync + 'static {
    async fn category_counts(&self) -> Result<CategoryCounts, StatsError>;

    async fn catalog_stats(&self) -> Result<CatalogStats, StatsError>;
}
