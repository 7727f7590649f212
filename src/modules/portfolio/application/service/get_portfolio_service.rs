use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::application::helpers::adapt;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, GetPublicPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, RawPortfolio,
};
use crate::modules::portfolio::domain::Portfolio;

/// Adapts a fetched payload, treating an absent row as not found.
pub(crate) fn adapt_found(
    raw: Result<Option<RawPortfolio>, PortfolioQueryError>,
) -> Result<Portfolio, GetPortfolioError> {
    let raw = raw
        .map_err(|PortfolioQueryError::DatabaseError(msg)| GetPortfolioError::RepositoryError(msg))?
        .ok_or(GetPortfolioError::NotFound)?;

    adapt(&raw).map_err(|e| {
        warn!("Stored portfolio {:?} failed adaptation: {}", raw.external_id, e);
        GetPortfolioError::Validation(e.to_string())
    })
}

//
// ──────────────────────────────────────────────────────────
// Admin read
// ──────────────────────────────────────────────────────────
//

pub struct GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioUseCase for GetPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Portfolio, GetPortfolioError> {
        adapt_found(self.query.find_by_id(id).await)
    }
}

//
// ──────────────────────────────────────────────────────────
// Public read
// ──────────────────────────────────────────────────────────
//

pub struct GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicPortfolioUseCase for GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, external_id: &str) -> Result<Portfolio, GetPortfolioError> {
        adapt_found(self.query.find_by_external_id(external_id).await)
    }
}
