use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::helpers::SnapshotCache;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetSitePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::portfolio::application::service::get_portfolio_service::adapt_found;
use crate::modules::portfolio::domain::Portfolio;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
// Serves the configured portfolio (or the oldest one) through the shared
// snapshot cache. Writers invalidate the same cache instance.
//

pub struct GetSitePortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    cache: Arc<SnapshotCache<Portfolio>>,
    site_external_id: Option<String>,
}

impl<Q> GetSitePortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(
        query: Q,
        cache: Arc<SnapshotCache<Portfolio>>,
        site_external_id: Option<String>,
    ) -> Self {
        Self {
            query,
            cache,
            site_external_id,
        }
    }
}

#[async_trait]
impl<Q> GetSitePortfolioUseCase for GetSitePortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError> {
        self.cache
            .get_or_refresh(|| async {
                info!("Refreshing site portfolio snapshot");
                let raw = match self.site_external_id.as_deref() {
                    Some(external_id) => self.query.find_by_external_id(external_id).await,
                    None => self.query.find_first().await,
                };
                adapt_found(raw)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::tests::support::portfolio_fixtures::{sample_portfolio, sample_raw_portfolio};
    use crate::tests::support::portfolio_mocks::MockPortfolioQueryMock;

    fn cache() -> Arc<SnapshotCache<Portfolio>> {
        Arc::new(SnapshotCache::new(Duration::from_secs(300)))
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let mut query = MockPortfolioQueryMock::new();
        query
            .expect_find_first()
            .times(1)
            .returning(|| Ok(Some(sample_raw_portfolio())));

        let service = GetSitePortfolioService::new(query, cache(), None);

        assert_eq!(service.execute().await, Ok(sample_portfolio()));
        assert_eq!(service.execute().await, Ok(sample_portfolio()));
    }

    #[tokio::test]
    async fn test_uses_configured_external_id() {
        let mut query = MockPortfolioQueryMock::new();
        query
            .expect_find_by_external_id()
            .withf(|external_id| external_id.to_string() == "jane")
            .times(1)
            .returning(|_| Ok(Some(sample_raw_portfolio())));
        query.expect_find_first().never();

        let service = GetSitePortfolioService::new(query, cache(), Some("jane".to_string()));

        assert!(service.execute().await.is_ok());
    }

    #[tokio::test]
    async fn test_invalidation_triggers_reload() {
        let shared = cache();
        let mut query = MockPortfolioQueryMock::new();
        query
            .expect_find_first()
            .times(2)
            .returning(|| Ok(Some(sample_raw_portfolio())));

        let service = GetSitePortfolioService::new(query, shared.clone(), None);

        service.execute().await.unwrap();
        shared.invalidate().await;
        service.execute().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_store_is_not_found_and_not_cached() {
        let mut query = MockPortfolioQueryMock::new();
        query.expect_find_first().times(2).returning(|| Ok(None));

        let service = GetSitePortfolioService::new(query, cache(), None);

        assert_eq!(service.execute().await, Err(GetPortfolioError::NotFound));
        assert_eq!(service.execute().await, Err(GetPortfolioError::NotFound));
    }
}
