use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    ExperiencePatch, ProfilePatch, ProjectPatch,
};
use crate::modules::portfolio::domain::{Experience, Portfolio, Project, Skill, Tool};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditPortfolioError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("No {collection} entry at position {index}")]
    EntryNotFound {
        collection: &'static str,
        index: usize,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
// Every successful edit invalidates the site snapshot and returns the
// portfolio as re-read from storage.
//

#[async_trait]
pub trait EditPortfolioUseCase: Send + Sync {
    async fn update_profile(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Portfolio, EditPortfolioError>;

    async fn add_experience(
        &self,
        id: Uuid,
        experience: Experience,
    ) -> Result<Portfolio, EditPortfolioError>;

    async fn update_experience(
        &self,
        id: Uuid,
        index: usize,
        patch: ExperiencePatch,
    ) -> Result<Portfolio, EditPortfolioError>;

    async fn remove_experience(&self, id: Uuid, index: usize)
        -> Result<Portfolio, EditPortfolioError>;

    async fn add_project(&self, id: Uuid, project: Project)
        -> Result<Portfolio, EditPortfolioError>;

    async fn update_project(
        &self,
        id: Uuid,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<Portfolio, EditPortfolioError>;

    async fn remove_project(&self, id: Uuid, index: usize)
        -> Result<Portfolio, EditPortfolioError>;

    async fn replace_skills(
        &self,
        id: Uuid,
        skills: Vec<Skill>,
    ) -> Result<Portfolio, EditPortfolioError>;

    async fn replace_tools(&self, id: Uuid, tools: Vec<Tool>)
        -> Result<Portfolio, EditPortfolioError>;
}
