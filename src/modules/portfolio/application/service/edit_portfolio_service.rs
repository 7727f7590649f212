use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::helpers::SnapshotCache;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioUseCase, GetPortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ExperiencePatch, PortfolioQuery, PortfolioRepository, PortfolioRepositoryError, ProfilePatch,
    ProjectPatch,
};
use crate::modules::portfolio::application::service::get_portfolio_service::adapt_found;
use crate::modules::portfolio::domain::validation::{
    require_text, validate_email, validate_experience, validate_project, validate_skills,
    validate_tools, ValidationError,
};
use crate::modules::portfolio::domain::{Experience, Portfolio, Project, Skill, Tool};

fn map_repo_err(e: PortfolioRepositoryError) -> EditPortfolioError {
    match e {
        PortfolioRepositoryError::PortfolioNotFound => EditPortfolioError::PortfolioNotFound,
        PortfolioRepositoryError::EntryNotFound { collection, index } => {
            EditPortfolioError::EntryNotFound { collection, index }
        }
        PortfolioRepositoryError::DatabaseError(msg) => EditPortfolioError::RepositoryError(msg),
        // externalId is never edited here
        PortfolioRepositoryError::ExternalIdTaken => EditPortfolioError::RepositoryError(
            "unexpected externalId conflict while editing portfolio".to_string(),
        ),
    }
}

fn invalid(e: ValidationError) -> EditPortfolioError {
    EditPortfolioError::Validation(e.to_string())
}

fn validate_profile_patch(patch: &ProfilePatch) -> Result<(), ValidationError> {
    if let Some(full_name) = &patch.full_name {
        require_text("full_name", full_name)?;
    }
    if let Some(email) = &patch.email {
        validate_email(email)?;
    }
    Ok(())
}

fn validate_experience_patch(patch: &ExperiencePatch) -> Result<(), ValidationError> {
    if let Some(company_name) = &patch.company_name {
        require_text("company_name", company_name)?;
    }
    if let Some(start_date) = &patch.start_date {
        require_text("start_date", start_date)?;
    }
    Ok(())
}

fn validate_project_patch(patch: &ProjectPatch) -> Result<(), ValidationError> {
    match &patch.title {
        Some(title) => require_text("title", title),
        None => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct EditPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    query: Q,
    repository: R,
    cache: Arc<SnapshotCache<Portfolio>>,
}

impl<Q, R> EditPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, cache: Arc<SnapshotCache<Portfolio>>) -> Self {
        Self {
            query,
            repository,
            cache,
        }
    }

    /// Invalidates the snapshot after a successful write and re-reads the portfolio.
    async fn after_write(
        &self,
        id: Uuid,
        operation: &str,
        written: Result<(), PortfolioRepositoryError>,
    ) -> Result<Portfolio, EditPortfolioError> {
        written.map_err(map_repo_err)?;

        self.cache.invalidate().await;
        info!("Portfolio {} edited: {}", id, operation);

        adapt_found(self.query.find_by_id(id).await).map_err(|e| match e {
            GetPortfolioError::NotFound => EditPortfolioError::PortfolioNotFound,
            GetPortfolioError::Validation(msg) => EditPortfolioError::Validation(msg),
            GetPortfolioError::RepositoryError(msg) => EditPortfolioError::RepositoryError(msg),
        })
    }
}

#[async_trait]
impl<Q, R> EditPortfolioUseCase for EditPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn update_profile(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_profile_patch(&patch).map_err(invalid)?;
        let written = self.repository.update_profile(id, patch).await;
        self.after_write(id, "update_profile", written).await
    }

    async fn add_experience(
        &self,
        id: Uuid,
        experience: Experience,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_experience(&experience).map_err(invalid)?;
        let written = self.repository.add_experience(id, experience).await;
        self.after_write(id, "add_experience", written).await
    }

    async fn update_experience(
        &self,
        id: Uuid,
        index: usize,
        patch: ExperiencePatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_experience_patch(&patch).map_err(invalid)?;
        let written = self.repository.update_experience(id, index, patch).await;
        self.after_write(id, "update_experience", written).await
    }

    async fn remove_experience(
        &self,
        id: Uuid,
        index: usize,
    ) -> Result<Portfolio, EditPortfolioError> {
        let written = self.repository.remove_experience(id, index).await;
        self.after_write(id, "remove_experience", written).await
    }

    async fn add_project(
        &self,
        id: Uuid,
        project: Project,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_project(&project).map_err(invalid)?;
        let written = self.repository.add_project(id, project).await;
        self.after_write(id, "add_project", written).await
    }

    async fn update_project(
        &self,
        id: Uuid,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_project_patch(&patch).map_err(invalid)?;
        let written = self.repository.update_project(id, index, patch).await;
        self.after_write(id, "update_project", written).await
    }

    async fn remove_project(
        &self,
        id: Uuid,
        index: usize,
    ) -> Result<Portfolio, EditPortfolioError> {
        let written = self.repository.remove_project(id, index).await;
        self.after_write(id, "remove_project", written).await
    }

    async fn replace_skills(
        &self,
        id: Uuid,
        skills: Vec<Skill>,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_skills(&skills).map_err(invalid)?;
        let written = self.repository.replace_skills(id, skills).await;
        self.after_write(id, "replace_skills", written).await
    }

    async fn replace_tools(
        &self,
        id: Uuid,
        tools: Vec<Tool>,
    ) -> Result<Portfolio, EditPortfolioError> {
        validate_tools(&tools).map_err(invalid)?;
        let written = self.repository.replace_tools(id, tools).await;
        self.after_write(id, "replace_tools", written).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::time::Duration;

    use crate::modules::portfolio::application::ports::outgoing::PatchField;
    use crate::tests::support::portfolio_fixtures::{
        sample_experience, sample_portfolio, sample_raw_portfolio,
    };
    use crate::tests::support::portfolio_mocks::{
        MockPortfolioQueryMock, MockPortfolioRepositoryMock,
    };

    fn reloading_query(times: usize) -> MockPortfolioQueryMock {
        let mut query = MockPortfolioQueryMock::new();
        query
            .expect_find_by_id()
            .times(times)
            .returning(|_| Ok(Some(sample_raw_portfolio())));
        query
    }

    async fn warm_cache() -> Arc<SnapshotCache<Portfolio>> {
        let cache = Arc::new(SnapshotCache::new(Duration::from_secs(300)));
        cache.store(sample_portfolio()).await;
        cache
    }

    // =====================================================
    // Success + post-conditions
    // =====================================================

    #[tokio::test]
    async fn test_update_profile_invalidates_and_reloads() {
        let id = Uuid::new_v4();
        let cache = warm_cache().await;

        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_update_profile()
            .withf(|_, patch| patch.full_name.as_deref() == Some("Jane Q. Doe"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = EditPortfolioService::new(reloading_query(1), repo, cache.clone());

        let patch = ProfilePatch {
            full_name: Some("Jane Q. Doe".to_string()),
            ..Default::default()
        };
        let result = service.update_profile(id, patch).await;

        assert_eq!(result, Ok(sample_portfolio()));
        assert_eq!(cache.get().await, None);
    }

    #[tokio::test]
    async fn test_update_experience_passes_index_and_null_end_date() {
        let id = Uuid::new_v4();

        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_update_experience()
            .with(
                eq(id),
                eq(2usize),
                eq(ExperiencePatch {
                    end_date: PatchField::Null,
                    ..Default::default()
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = EditPortfolioService::new(reloading_query(1), repo, warm_cache().await);

        let patch = ExperiencePatch {
            end_date: PatchField::Null,
            ..Default::default()
        };
        assert!(service.update_experience(id, 2, patch).await.is_ok());
    }

    #[tokio::test]
    async fn test_replace_skills() {
        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_replace_skills()
            .withf(|_, skills| skills.len() == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = EditPortfolioService::new(reloading_query(1), repo, warm_cache().await);

        let skills = vec![
            Skill {
                title: "APIs".to_string(),
                category: None,
            },
            Skill {
                title: "SQL".to_string(),
                category: Some("Data".to_string()),
            },
        ];
        assert!(service.replace_skills(Uuid::new_v4(), skills).await.is_ok());
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_out_of_range_index_is_entry_not_found_and_cache_survives() {
        let cache = warm_cache().await;

        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_remove_project().returning(|_, index| {
            Err(PortfolioRepositoryError::EntryNotFound {
                collection: "projects",
                index,
            })
        });

        let service = EditPortfolioService::new(reloading_query(0), repo, cache.clone());

        assert_eq!(
            service.remove_project(Uuid::new_v4(), 9).await,
            Err(EditPortfolioError::EntryNotFound {
                collection: "projects",
                index: 9
            })
        );
        assert!(cache.get().await.is_some());
    }

    #[tokio::test]
    async fn test_missing_portfolio_is_not_found() {
        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_add_experience()
            .returning(|_, _| Err(PortfolioRepositoryError::PortfolioNotFound));

        let service = EditPortfolioService::new(reloading_query(0), repo, warm_cache().await);

        assert_eq!(
            service.add_experience(Uuid::new_v4(), sample_experience()).await,
            Err(EditPortfolioError::PortfolioNotFound)
        );
    }

    #[tokio::test]
    async fn test_database_error() {
        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_replace_tools()
            .returning(|_, _| Err(PortfolioRepositoryError::DatabaseError("db down".to_string())));

        let service = EditPortfolioService::new(reloading_query(0), repo, warm_cache().await);

        assert_eq!(
            service.replace_tools(Uuid::new_v4(), vec![]).await,
            Err(EditPortfolioError::RepositoryError("db down".to_string()))
        );
    }

    // =====================================================
    // Validation
    // =====================================================

    #[tokio::test]
    async fn test_blank_name_and_bad_email_rejected() {
        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_update_profile().never();

        let service = EditPortfolioService::new(reloading_query(0), repo, warm_cache().await);

        let blank = ProfilePatch {
            full_name: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_profile(Uuid::new_v4(), blank).await,
            Err(EditPortfolioError::Validation(_))
        ));

        let bad_email = ProfilePatch {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_profile(Uuid::new_v4(), bad_email).await,
            Err(EditPortfolioError::Validation(msg)) if msg == "Invalid email format"
        ));
    }

    #[tokio::test]
    async fn test_blank_project_title_rejected() {
        let mut repo = MockPortfolioRepositoryMock::new();
        repo.expect_add_project().never();

        let service = EditPortfolioService::new(reloading_query(0), repo, warm_cache().await);

        let project = Project {
            title: String::new(),
            description: "x".to_string(),
            link: String::new(),
            features: vec![],
        };
        assert_eq!(
            service.add_project(Uuid::new_v4(), project).await,
            Err(EditPortfolioError::Validation("title cannot be empty".to_string()))
        );
    }
}
