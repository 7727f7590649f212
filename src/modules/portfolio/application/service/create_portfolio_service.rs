use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::helpers::SnapshotCache;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioUseCase, CreatedPortfolio, GetPortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, PortfolioQuery, PortfolioQueryError, PortfolioRepository,
    PortfolioRepositoryError,
};
use crate::modules::portfolio::application::service::get_portfolio_service::adapt_found;
use crate::modules::portfolio::domain::validation::{
    validate_experience, validate_external_id, validate_profile, validate_project,
    validate_skills, validate_tools, ValidationError,
};
use crate::modules::portfolio::domain::Portfolio;

fn validate(data: &CreatePortfolioData) -> Result<(), ValidationError> {
    validate_external_id(&data.external_id)?;
    validate_profile(&data.profile)?;
    data.experience.iter().try_for_each(validate_experience)?;
    data.projects.iter().try_for_each(validate_project)?;
    validate_skills(&data.skills)?;
    validate_tools(&data.tools)
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    query: Q,
    repository: R,
    cache: Arc<SnapshotCache<Portfolio>>,
}

impl<Q, R> CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(query: Q, repository: R, cache: Arc<SnapshotCache<Portfolio>>) -> Self {
        Self {
            query,
            repository,
            cache,
        }
    }
}

#[async_trait]
impl<Q, R> CreatePortfolioUseCase for CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreatePortfolioData,
    ) -> Result<CreatedPortfolio, CreatePortfolioError> {
        validate(&data).map_err(|e| CreatePortfolioError::Validation(e.to_string()))?;

        let taken = self
            .query
            .external_id_exists(&data.external_id)
            .await
            .map_err(|PortfolioQueryError::DatabaseError(msg)| {
                CreatePortfolioError::RepositoryError(msg)
            })?;
        if taken {
            return Err(CreatePortfolioError::ExternalIdTaken);
        }

        let external_id = data.external_id.clone();
        let id = self
            .repository
            .create_portfolio(data)
            .await
            .map_err(|e| match e {
                // unique constraint hit by a concurrent create
                PortfolioRepositoryError::ExternalIdTaken => CreatePortfolioError::ExternalIdTaken,
                PortfolioRepositoryError::DatabaseError(msg) => {
                    CreatePortfolioError::RepositoryError(msg)
                }
                PortfolioRepositoryError::PortfolioNotFound
                | PortfolioRepositoryError::EntryNotFound { .. } => {
                    CreatePortfolioError::RepositoryError(
                        "unexpected not found while creating portfolio".to_string(),
                    )
                }
            })?;

        // the site may fall back to the first portfolio
        self.cache.invalidate().await;
        info!("Created portfolio {} ({})", external_id, id);

        let portfolio = adapt_found(self.query.find_by_id(id).await).map_err(|e| match e {
            GetPortfolioError::NotFound => CreatePortfolioError::RepositoryError(
                "created portfolio could not be read back".to_string(),
            ),
            GetPortfolioError::Validation(msg) => CreatePortfolioError::Validation(msg),
            GetPortfolioError::RepositoryError(msg) => CreatePortfolioError::RepositoryError(msg),
        })?;

        Ok(CreatedPortfolio { id, portfolio })
    }
}
