use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::domain::Portfolio;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    /// Stored data could not be adapted into the domain model.
    #[error("Invalid portfolio data: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

/// Admin read by internal id.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Portfolio, GetPortfolioError>;
}

/// Public read by `externalId`.
#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(&self, external_id: &str) -> Result<Portfolio, GetPortfolioError>;
}

/// The portfolio served by the site, read through the snapshot cache.
#[async_trait]
pub trait GetSitePortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError>;
}
