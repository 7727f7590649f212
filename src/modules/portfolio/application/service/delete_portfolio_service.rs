use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::helpers::SnapshotCache;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::Portfolio;

pub struct DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
    cache: Arc<SnapshotCache<Portfolio>>,
}

impl<R> DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R, cache: Arc<SnapshotCache<Portfolio>>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R> DeletePortfolioUseCase for DeletePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioError> {
        self.repository
            .delete_portfolio(id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::PortfolioNotFound => DeletePortfolioError::NotFound,
                PortfolioRepositoryError::DatabaseError(msg) => {
                    DeletePortfolioError::RepositoryError(msg)
                }
                other => DeletePortfolioError::RepositoryError(other.to_string()),
            })?;

        self.cache.invalidate().await;
        info!("Deleted portfolio {}", id);
        Ok(())
    }
}
