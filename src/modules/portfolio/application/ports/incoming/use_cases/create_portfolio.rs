use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::CreatePortfolioData;
use crate::modules::portfolio::domain::Portfolio;

//
// ──────────────────────────────────────────────────────────
// Result / Errors
// ──────────────────────────────────────────────────────────
//

/// Returned to the admin only: the internal id addresses later edits.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreatedPortfolio {
    pub id: Uuid,
    pub portfolio: Portfolio,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePortfolioError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External id already exists")]
    ExternalIdTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreatePortfolioData,
    ) -> Result<CreatedPortfolio, CreatePortfolioError>;
}
