use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioListItem;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListPortfoliosError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPortfoliosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PortfolioListItem>, ListPortfoliosError>;
}
