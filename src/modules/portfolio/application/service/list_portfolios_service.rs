use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListPortfoliosError, ListPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioListItem, PortfolioQuery, PortfolioQueryError,
};

pub struct ListPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> ListPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPortfoliosUseCase for ListPortfoliosService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PortfolioListItem>, ListPortfoliosError> {
        self.query
            .list()
            .await
            .map_err(|PortfolioQueryError::DatabaseError(msg)| ListPortfoliosError::RepositoryError(msg))
    }
}
