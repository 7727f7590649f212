use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioError>;
}
