use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::stats::errors::StatsError;
use crate::domain::stats::models::CatalogStats;
use crate::domain::stats::models::CategoryCounts;
use crate::domain::stats::ports::StatsRepository;
use crate::domain::stats::ports::StatsServicePort;

/// Domain service implementation for catalog statistics.
pub struct StatsService<SR>
where
    SR: StatsRepository,
{
    repository: Arc<SR>,
}

impl<SR> StatsService<SR>
where
    SR: StatsRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> StatsServicePort for StatsService<SR>
where
    SR: StatsRepository,
{
    async fn category_counts(&self) -> Result<CategoryCounts, StatsError> {
        self.repository.category_counts().await
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, StatsError> {
        self.repository.catalog_stats().await
    }
}
