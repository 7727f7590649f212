use async_trait::async_trait;

use crate::modules::portfolio::application::helpers::ExportedFile;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportPortfolioError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Portfolio not found")]
    NotFound,

    #[error("Invalid portfolio data: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ExportPortfolioUseCase: Send + Sync {
    /// Renders the portfolio named by `external_id`, or the site portfolio
    /// when it is `None`, in the requested format.
    async fn execute(
        &self,
        external_id: Option<&str>,
        format: &str,
        filename: Option<&str>,
    ) -> Result<ExportedFile, ExportPortfolioError>;
}
