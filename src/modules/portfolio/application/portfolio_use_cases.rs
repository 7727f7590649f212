use std::sync::Arc;

use crate::modules::portfolio::application::helpers::SnapshotCache;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, EditPortfolioUseCase, ExportPortfolioUseCase,
    GetPortfolioUseCase, GetPublicPortfolioUseCase, GetSitePortfolioUseCase,
    ListPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository,
};
use crate::modules::portfolio::application::service::{
    CreatePortfolioService, DeletePortfolioService, EditPortfolioService, ExportPortfolioService,
    GetPortfolioService, GetPublicPortfolioService, GetSitePortfolioService,
    ListPortfoliosService,
};
use crate::modules::portfolio::domain::Portfolio;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub list: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub get_site: Arc<dyn GetSitePortfolioUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPortfolioUseCase + Send + Sync>,
    pub export: Arc<dyn ExportPortfolioUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires every service around one query adapter, one repository adapter
    /// and a single shared snapshot cache.
    pub fn new<Q, R>(
        query: Q,
        repository: R,
        cache: Arc<SnapshotCache<Portfolio>>,
        site_external_id: Option<String>,
    ) -> Self
    where
        Q: PortfolioQuery + Clone + 'static,
        R: PortfolioRepository + Clone + 'static,
    {
        let get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync> =
            Arc::new(GetPublicPortfolioService::new(query.clone()));
        let get_site: Arc<dyn GetSitePortfolioUseCase + Send + Sync> = Arc::new(
            GetSitePortfolioService::new(query.clone(), cache.clone(), site_external_id),
        );

        Self {
            list: Arc::new(ListPortfoliosService::new(query.clone())),
            get: Arc::new(GetPortfolioService::new(query.clone())),
            get_public: get_public.clone(),
            get_site: get_site.clone(),
            create: Arc::new(CreatePortfolioService::new(
                query.clone(),
                repository.clone(),
                cache.clone(),
            )),
            delete: Arc::new(DeletePortfolioService::new(repository.clone(), cache.clone())),
            edit: Arc::new(EditPortfolioService::new(query, repository, cache)),
            export: Arc::new(ExportPortfolioService::new(get_public, get_site)),
        }
    }
}
