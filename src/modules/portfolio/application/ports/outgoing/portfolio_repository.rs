// src/modules/portfolio/application/ports/outgoing/portfolio_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::domain::{
    Blog, Contact, Experience, Feature, JobType, Profile, ProgrammingRole, Project, Skill, Tool,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (nullable fields only)
// - Value(v): replace with v
//
// With #[serde(default)] an omitted field deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    /// Collapses into the nullable form: `None` keeps, `Some(None)` clears.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePortfolioData {
    pub external_id: String,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub tools: Vec<Tool>,
    pub blogs: Vec<Blog>,
    pub contacts: Vec<Contact>,
}

/// Shallow merge onto the stored profile. `contacts`, when present, replaces
/// the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub profile_picture: Option<String>,
    pub contacts: Option<Vec<Contact>>,
}

/// `end_date`: Null marks the position as ongoing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperiencePatch {
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: PatchField<String>,
    pub role: Option<ProgrammingRole>,
    pub job_type: Option<JobType>,
    pub contacts: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Replaces all features (and their tech-stack links) when present.
    pub features: Option<Vec<Feature>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    /// Position outside the current list.
    #[error("No {collection} entry at position {index}")]
    EntryNotFound {
        collection: &'static str,
        index: usize,
    },

    #[error("External id already exists")]
    ExternalIdTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
// Portfolios are addressed by internal id only. Collection entries are
// addressed by display position at call time.
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
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

    async fn remove_experience(&self, id: Uuid, index: usize)
        -> Result<(), PortfolioRepositoryError>;

    async fn add_project(&self, id: Uuid, project: Project)
        -> Result<(), PortfolioRepositoryError>;

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

    async fn replace_tools(&self, id: Uuid, tools: Vec<Tool>)
        -> Result<(), PortfolioRepositoryError>;
}
