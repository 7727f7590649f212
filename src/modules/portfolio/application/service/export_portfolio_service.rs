use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::helpers::{
    ConvertError, ExportFormat, ExportedFile, PortfolioConverter,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ExportPortfolioError, ExportPortfolioUseCase, GetPortfolioError, GetPublicPortfolioUseCase,
    GetSitePortfolioUseCase,
};

fn map_convert_err(e: ConvertError) -> ExportPortfolioError {
    match e {
        ConvertError::UnsupportedFormat(format) => ExportPortfolioError::UnsupportedFormat(format),
        ConvertError::Serialization(msg) => ExportPortfolioError::RepositoryError(msg),
    }
}

/// Renders files from either a public portfolio or the cached site portfolio.
pub struct ExportPortfolioService {
    public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    site: Arc<dyn GetSitePortfolioUseCase + Send + Sync>,
}

impl ExportPortfolioService {
    pub fn new(
        public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
        site: Arc<dyn GetSitePortfolioUseCase + Send + Sync>,
    ) -> Self {
        Self { public, site }
    }
}

#[async_trait]
impl ExportPortfolioUseCase for ExportPortfolioService {
    async fn execute(
        &self,
        external_id: Option<&str>,
        format: &str,
        filename: Option<&str>,
    ) -> Result<ExportedFile, ExportPortfolioError> {
        let format: ExportFormat = format.parse().map_err(map_convert_err)?;

        let portfolio = match external_id {
            Some(external_id) => self.public.execute(external_id).await,
            None => self.site.execute().await,
        }
        .map_err(|e| match e {
            GetPortfolioError::NotFound => ExportPortfolioError::NotFound,
            GetPortfolioError::Validation(msg) => ExportPortfolioError::Validation(msg),
            GetPortfolioError::RepositoryError(msg) => ExportPortfolioError::RepositoryError(msg),
        })?;

        let file = PortfolioConverter::new(&portfolio)
            .export(format, filename)
            .map_err(map_convert_err)?;

        info!(
            "Exported portfolio {} as {} ({} bytes)",
            portfolio.external_id,
            format,
            file.content.len()
        );
        Ok(file)
    }
}
