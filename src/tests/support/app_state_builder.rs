use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, DeletePortfolioError, EditPortfolioError, ExportPortfolioError,
    GetPortfolioError,
};
use crate::modules::portfolio::PortfolioUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a harmless stub; tests swap in the one
/// they exercise.
pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let reader = StubPortfolioReader::error(GetPortfolioError::NotFound);
        Self {
            portfolio: PortfolioUseCases {
                list: Arc::new(StubListPortfoliosUseCase::success(vec![])),
                get: Arc::new(reader.clone()),
                get_public: Arc::new(reader.clone()),
                get_site: Arc::new(reader),
                create: Arc::new(StubCreatePortfolioUseCase::error(
                    CreatePortfolioError::RepositoryError("not used in this test".to_string()),
                )),
                delete: Arc::new(StubDeletePortfolioUseCase::error(
                    DeletePortfolioError::NotFound,
                )),
                edit: Arc::new(StubEditPortfolioUseCase::error(
                    EditPortfolioError::PortfolioNotFound,
                )),
                export: Arc::new(StubExportPortfolioUseCase::error(
                    ExportPortfolioError::NotFound,
                )),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list(mut self, uc: StubListPortfoliosUseCase) -> Self {
        self.portfolio.list = Arc::new(uc);
        self
    }

    pub fn with_get(mut self, uc: StubPortfolioReader) -> Self {
        self.portfolio.get = Arc::new(uc);
        self
    }

    pub fn with_get_public(mut self, uc: StubPortfolioReader) -> Self {
        self.portfolio.get_public = Arc::new(uc);
        self
    }

    pub fn with_get_site(mut self, uc: StubPortfolioReader) -> Self {
        self.portfolio.get_site = Arc::new(uc);
        self
    }

    pub fn with_create(mut self, uc: StubCreatePortfolioUseCase) -> Self {
        self.portfolio.create = Arc::new(uc);
        self
    }

    pub fn with_delete(mut self, uc: StubDeletePortfolioUseCase) -> Self {
        self.portfolio.delete = Arc::new(uc);
        self
    }

    pub fn with_edit(mut self, uc: StubEditPortfolioUseCase) -> Self {
        self.portfolio.edit = Arc::new(uc);
        self
    }

    pub fn with_export(mut self, uc: StubExportPortfolioUseCase) -> Self {
        self.portfolio.export = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
        })
    }
}
