use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::helpers::ExportedFile;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioUseCase, CreatedPortfolio, DeletePortfolioError,
    DeletePortfolioUseCase, EditPortfolioError, EditPortfolioUseCase, ExportPortfolioError,
    ExportPortfolioUseCase, GetPortfolioError, GetPortfolioUseCase, GetPublicPortfolioUseCase,
    GetSitePortfolioUseCase, ListPortfoliosError, ListPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, ExperiencePatch, PortfolioListItem, ProfilePatch, ProjectPatch,
};
use crate::modules::portfolio::domain::{Experience, Portfolio, Project, Skill, Tool};

#[derive(Clone)]
pub struct StubListPortfoliosUseCase {
    result: Result<Vec<PortfolioListItem>, ListPortfoliosError>,
}

impl StubListPortfoliosUseCase {
    pub fn success(items: Vec<PortfolioListItem>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn error(err: ListPortfoliosError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListPortfoliosUseCase for StubListPortfoliosUseCase {
    async fn execute(&self) -> Result<Vec<PortfolioListItem>, ListPortfoliosError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCreatePortfolioUseCase {
    result: Result<CreatedPortfolio, CreatePortfolioError>,
}

impl StubCreatePortfolioUseCase {
    pub fn success(created: CreatedPortfolio) -> Self {
        Self {
            result: Ok(created),
        }
    }

    pub fn error(err: CreatePortfolioError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreatePortfolioUseCase for StubCreatePortfolioUseCase {
    async fn execute(
        &self,
        _data: CreatePortfolioData,
    ) -> Result<CreatedPortfolio, CreatePortfolioError> {
        self.result.clone()
    }
}

/// Serves every read flavour from one canned result.
#[derive(Clone)]
pub struct StubPortfolioReader {
    result: Result<Portfolio, GetPortfolioError>,
}

impl StubPortfolioReader {
    pub fn success(portfolio: Portfolio) -> Self {
        Self {
            result: Ok(portfolio),
        }
    }

    pub fn error(err: GetPortfolioError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubPortfolioReader {
    async fn execute(&self, _id: Uuid) -> Result<Portfolio, GetPortfolioError> {
        self.result.clone()
    }
}

#[async_trait]
impl GetPublicPortfolioUseCase for StubPortfolioReader {
    async fn execute(&self, _external_id: &str) -> Result<Portfolio, GetPortfolioError> {
        self.result.clone()
    }
}

#[async_trait]
impl GetSitePortfolioUseCase for StubPortfolioReader {
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeletePortfolioUseCase {
    result: Result<(), DeletePortfolioError>,
}

impl StubDeletePortfolioUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeletePortfolioError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeletePortfolioError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubExportPortfolioUseCase {
    result: Result<ExportedFile, ExportPortfolioError>,
}

impl StubExportPortfolioUseCase {
    pub fn success(file: ExportedFile) -> Self {
        Self { result: Ok(file) }
    }

    pub fn error(err: ExportPortfolioError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ExportPortfolioUseCase for StubExportPortfolioUseCase {
    async fn execute(
        &self,
        _external_id: Option<&str>,
        _format: &str,
        _filename: Option<&str>,
    ) -> Result<ExportedFile, ExportPortfolioError> {
        self.result.clone()
    }
}

/// Records which edit operation a handler dispatched to. Clones share the
/// same call log.
#[derive(Clone)]
pub struct StubEditPortfolioUseCase {
    result: Result<Portfolio, EditPortfolioError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubEditPortfolioUseCase {
    pub fn success(portfolio: Portfolio) -> Self {
        Self {
            result: Ok(portfolio),
            calls: Arc::default(),
        }
    }

    pub fn error(err: EditPortfolioError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<Portfolio, EditPortfolioError> {
        self.calls.lock().unwrap().push(call.into());
        self.result.clone()
    }
}

#[async_trait]
impl EditPortfolioUseCase for StubEditPortfolioUseCase {
    async fn update_profile(
        &self,
        _id: Uuid,
        _patch: ProfilePatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record("update_profile")
    }

    async fn add_experience(
        &self,
        _id: Uuid,
        _experience: Experience,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record("add_experience")
    }

    async fn update_experience(
        &self,
        _id: Uuid,
        index: usize,
        _patch: ExperiencePatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record(format!("update_experience:{index}"))
    }

    async fn remove_experience(
        &self,
        _id: Uuid,
        index: usize,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record(format!("remove_experience:{index}"))
    }

    async fn add_project(
        &self,
        _id: Uuid,
        _project: Project,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record("add_project")
    }

    async fn update_project(
        &self,
        _id: Uuid,
        index: usize,
        _patch: ProjectPatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record(format!("update_project:{index}"))
    }

    async fn remove_project(
        &self,
        _id: Uuid,
        index: usize,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record(format!("remove_project:{index}"))
    }

    async fn replace_skills(
        &self,
        _id: Uuid,
        _skills: Vec<Skill>,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record("replace_skills")
    }

    async fn replace_tools(
        &self,
        _id: Uuid,
        _tools: Vec<Tool>,
    ) -> Result<Portfolio, EditPortfolioError> {
        self.record("replace_tools")
    }
}
