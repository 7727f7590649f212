use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, ExperiencePatch, PortfolioListItem, PortfolioQuery, PortfolioQueryError,
    PortfolioRepository, PortfolioRepositoryError, ProfilePatch, ProjectPatch, RawPortfolio,
};
use crate::modules::portfolio::domain::{Experience, Project, Skill, Tool};

mock! {
    pub PortfolioQueryMock {}
    #[async_trait]
    impl PortfolioQuery for PortfolioQueryMock {
        async fn list(&self) -> Result<Vec<PortfolioListItem>, PortfolioQueryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<RawPortfolio>, PortfolioQueryError>;
        async fn find_by_external_id(
            &self,
            external_id: &str,
        ) -> Result<Option<RawPortfolio>, PortfolioQueryError>;
        async fn find_first(&self) -> Result<Option<RawPortfolio>, PortfolioQueryError>;
        async fn external_id_exists(&self, external_id: &str) -> Result<bool, PortfolioQueryError>;
    }
}

mock! {
    pub PortfolioRepositoryMock {}
    #[async_trait]
    impl PortfolioRepository for PortfolioRepositoryMock {
        async fn create_portfolio(
            &self,
            data: CreatePortfolioData,
        ) -> Result<Uuid, PortfolioRepositoryError>;
        async fn delete_portfolio(&self, id: Uuid) -> Result<(), PortfolioRepositoryError>;
        async fn update_profile(
            &self,
            id: Uuid,
            patch: ProfilePatch,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn add_experience(
            &self,
            id: Uuid,
            experience: Experience,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn update_experience(
            &self,
            id: Uuid,
            index: usize,
            patch: ExperiencePatch,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn remove_experience(
            &self,
            id: Uuid,
            index: usize,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn add_project(
            &self,
            id: Uuid,
            project: Project,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn update_project(
            &self,
            id: Uuid,
            index: usize,
            patch: ProjectPatch,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn remove_project(&self, id: Uuid, index: usize) -> Result<(), PortfolioRepositoryError>;
        async fn replace_skills(
            &self,
            id: Uuid,
            skills: Vec<Skill>,
        ) -> Result<(), PortfolioRepositoryError>;
        async fn replace_tools(
            &self,
            id: Uuid,
            tools: Vec<Tool>,
        ) -> Result<(), PortfolioRepositoryError>;
    }
}
