// src/modules/portfolio/adapter/outgoing/portfolio_repository_postgres.rs

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    Statement, TransactionTrait,
};
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    blog_tech_stacks, blogs, contacts, experience_contacts, experiences, feature_tech_stacks,
    features, portfolio_contacts, portfolios, profile_contacts, profiles, projects, skills,
    tech_stacks, tools,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, ExperiencePatch, PortfolioRepository, PortfolioRepositoryError,
    ProfilePatch, ProjectPatch,
};
use crate::modules::portfolio::domain::{
    Blog, Contact, Experience, Feature, Profile, Project, Skill, TechStack, Tool,
};

// ============================================================================
// Repository Implementation
// ============================================================================

/// Every write runs in a single transaction and bumps `portfolios.updated_at`.
///
/// Ordered rows carry a `position` column; collection entries are located by
/// their current position and then modified by row id.
#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, PortfolioRepositoryError> {
        self.db.begin().await.map_err(map_db_err)
    }
}

async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, PortfolioRepositoryError>,
) -> Result<T, PortfolioRepositoryError> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(map_db_err)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Rollback failed after {}: {}", e, rollback_err);
            }
            Err(e)
        }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<Uuid, PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = insert_portfolio(&txn, data).await;
        finish(txn, result).await
    }

    async fn delete_portfolio(&self, id: Uuid) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            let res = portfolios::Entity::delete_by_id(id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            if res.rows_affected == 0 {
                return Err(PortfolioRepositoryError::PortfolioNotFound);
            }
            purge_orphan_contacts(&txn).await.map_err(map_db_err)
        }
        .await;
        finish(txn, result).await
    }

    async fn update_profile(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let profile = profiles::Entity::find()
                .filter(profiles::Column::PortfolioId.eq(id))
                .one(&txn)
                .await
                .map_err(map_db_err)?
                .ok_or(PortfolioRepositoryError::PortfolioNotFound)?;

            let changes = profiles::ActiveModel {
                full_name: set_if(patch.full_name),
                email: set_if(patch.email),
                phone_number: set_if(patch.phone_number),
                address: set_if(patch.address),
                description: set_if(patch.description),
                profile_picture: set_if(patch.profile_picture),
                ..Default::default()
            };
            if changes.is_changed() {
                profiles::Entity::update_many()
                    .set(changes)
                    .filter(profiles::Column::Id.eq(profile.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
            }

            if let Some(contacts) = patch.contacts {
                profile_contacts::Entity::delete_many()
                    .filter(profile_contacts::Column::ProfileId.eq(profile.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
                purge_orphan_contacts(&txn).await.map_err(map_db_err)?;
                attach_profile_contacts(&txn, profile.id, &contacts)
                    .await
                    .map_err(map_db_err)?;
            }

            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn add_experience(
        &self,
        id: Uuid,
        experience: Experience,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let rows = ordered_experiences(&txn, id).await?;
            insert_experience(&txn, id, position(rows.len()), &experience)
                .await
                .map_err(map_db_err)?;
            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn update_experience(
        &self,
        id: Uuid,
        index: usize,
        patch: ExperiencePatch,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let row = entry_at(ordered_experiences(&txn, id).await?, "experience", index)?;

            let changes = experiences::ActiveModel {
                company_name: set_if(patch.company_name),
                company_description: set_if(patch.company_description),
                start_date: set_if(patch.start_date),
                end_date: set_if(patch.end_date.into_update()),
                role: set_if(patch.role.map(|r| r.as_str().to_string())),
                job_type: set_if(patch.job_type.map(|j| j.as_str().to_string())),
                ..Default::default()
            };
            if changes.is_changed() {
                experiences::Entity::update_many()
                    .set(changes)
                    .filter(experiences::Column::Id.eq(row.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
            }

            if let Some(contacts) = patch.contacts {
                experience_contacts::Entity::delete_many()
                    .filter(experience_contacts::Column::ExperienceId.eq(row.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
                purge_orphan_contacts(&txn).await.map_err(map_db_err)?;
                attach_experience_contacts(&txn, row.id, &contacts)
                    .await
                    .map_err(map_db_err)?;
            }

            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn remove_experience(
        &self,
        id: Uuid,
        index: usize,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let row = entry_at(ordered_experiences(&txn, id).await?, "experience", index)?;

            experiences::Entity::delete_by_id(row.id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            experiences::Entity::update_many()
                .col_expr(
                    experiences::Column::Position,
                    Expr::col(experiences::Column::Position).sub(1),
                )
                .filter(experiences::Column::PortfolioId.eq(id))
                .filter(experiences::Column::Position.gt(row.position))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            purge_orphan_contacts(&txn).await.map_err(map_db_err)?;

            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn add_project(&self, id: Uuid, project: Project) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let rows = ordered_projects(&txn, id).await?;
            insert_project(&txn, id, position(rows.len()), &project)
                .await
                .map_err(map_db_err)?;
            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn update_project(
        &self,
        id: Uuid,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let row = entry_at(ordered_projects(&txn, id).await?, "project", index)?;

            let changes = projects::ActiveModel {
                title: set_if(patch.title),
                description: set_if(patch.description),
                link: set_if(patch.link.map(optional_link)),
                ..Default::default()
            };
            if changes.is_changed() {
                projects::Entity::update_many()
                    .set(changes)
                    .filter(projects::Column::Id.eq(row.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
            }

            if let Some(features) = patch.features {
                // cascades to feature_tech_stacks
                features::Entity::delete_many()
                    .filter(features::Column::ProjectId.eq(row.id))
                    .exec(&txn)
                    .await
                    .map_err(map_db_err)?;
                insert_features(&txn, row.id, &features)
                    .await
                    .map_err(map_db_err)?;
            }

            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn remove_project(&self, id: Uuid, index: usize) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            let row = entry_at(ordered_projects(&txn, id).await?, "project", index)?;

            projects::Entity::delete_by_id(row.id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            projects::Entity::update_many()
                .col_expr(
                    projects::Column::Position,
                    Expr::col(projects::Column::Position).sub(1),
                )
                .filter(projects::Column::PortfolioId.eq(id))
                .filter(projects::Column::Position.gt(row.position))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn replace_skills(
        &self,
        id: Uuid,
        skills: Vec<Skill>,
    ) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            skills::Entity::delete_many()
                .filter(skills::Column::PortfolioId.eq(id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            insert_skills(&txn, id, &skills).await.map_err(map_db_err)?;
            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }

    async fn replace_tools(&self, id: Uuid, tools: Vec<Tool>) -> Result<(), PortfolioRepositoryError> {
        let txn = self.begin().await?;
        let result = async {
            require_portfolio(&txn, id).await?;
            tools::Entity::delete_many()
                .filter(tools::Column::PortfolioId.eq(id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            insert_tools(&txn, id, &tools).await.map_err(map_db_err)?;
            touch(&txn, id).await
        }
        .await;
        finish(txn, result).await
    }
}

// ============================================================================
// Lookups
// ============================================================================

async fn require_portfolio(
    txn: &DatabaseTransaction,
    id: Uuid,
) -> Result<(), PortfolioRepositoryError> {
    portfolios::Entity::find_by_id(id)
        .one(txn)
        .await
        .map_err(map_db_err)?
        .map(|_| ())
        .ok_or(PortfolioRepositoryError::PortfolioNotFound)
}

async fn ordered_experiences(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
) -> Result<Vec<experiences::Model>, PortfolioRepositoryError> {
    experiences::Entity::find()
        .filter(experiences::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(experiences::Column::Position)
        .order_by_asc(experiences::Column::Id)
        .all(txn)
        .await
        .map_err(map_db_err)
}

async fn ordered_projects(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
) -> Result<Vec<projects::Model>, PortfolioRepositoryError> {
    projects::Entity::find()
        .filter(projects::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(projects::Column::Position)
        .order_by_asc(projects::Column::Id)
        .all(txn)
        .await
        .map_err(map_db_err)
}

fn entry_at<M>(
    rows: Vec<M>,
    collection: &'static str,
    index: usize,
) -> Result<M, PortfolioRepositoryError> {
    rows.into_iter()
        .nth(index)
        .ok_or(PortfolioRepositoryError::EntryNotFound { collection, index })
}

async fn touch(txn: &DatabaseTransaction, id: Uuid) -> Result<(), PortfolioRepositoryError> {
    portfolios::Entity::update_many()
        .col_expr(portfolios::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(portfolios::Column::Id.eq(id))
        .exec(txn)
        .await
        .map(|_| ())
        .map_err(map_db_err)
}

/// Contacts are owned by exactly one join row; drop the ones nothing points to.
async fn purge_orphan_contacts(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    txn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        DELETE FROM contacts c
        WHERE NOT EXISTS (SELECT 1 FROM profile_contacts pc WHERE pc.contact_id = c.id)
          AND NOT EXISTS (SELECT 1 FROM portfolio_contacts pc WHERE pc.contact_id = c.id)
          AND NOT EXISTS (SELECT 1 FROM experience_contacts ec WHERE ec.contact_id = c.id)
        "#,
        vec![],
    ))
    .await
    .map(|_| ())
}

// ============================================================================
// Inserts
// ============================================================================

async fn insert_portfolio(
    txn: &DatabaseTransaction,
    data: CreatePortfolioData,
) -> Result<Uuid, PortfolioRepositoryError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    portfolios::Entity::insert(portfolios::ActiveModel {
        id: Set(id),
        external_id: Set(data.external_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    })
    .exec_without_returning(txn)
    .await
    .map_err(map_external_id_error)?;

    insert_profile(txn, id, &data.profile).await.map_err(map_db_err)?;
    attach_portfolio_contacts(txn, id, &data.contacts)
        .await
        .map_err(map_db_err)?;

    for (i, experience) in data.experience.iter().enumerate() {
        insert_experience(txn, id, position(i), experience)
            .await
            .map_err(map_db_err)?;
    }
    for (i, project) in data.projects.iter().enumerate() {
        insert_project(txn, id, position(i), project)
            .await
            .map_err(map_db_err)?;
    }
    for (i, blog) in data.blogs.iter().enumerate() {
        insert_blog(txn, id, position(i), blog)
            .await
            .map_err(map_db_err)?;
    }
    insert_skills(txn, id, &data.skills).await.map_err(map_db_err)?;
    insert_tools(txn, id, &data.tools).await.map_err(map_db_err)?;

    Ok(id)
}

async fn insert_profile(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    profile: &Profile,
) -> Result<(), DbErr> {
    let profile_id = Uuid::new_v4();

    profiles::Entity::insert(profiles::ActiveModel {
        id: Set(profile_id),
        portfolio_id: Set(portfolio_id),
        full_name: Set(profile.full_name.clone()),
        email: Set(profile.email.clone()),
        phone_number: Set(profile.phone_number.clone()),
        address: Set(profile.address.clone()),
        description: Set(profile.description.clone()),
        profile_picture: Set(profile.profile_picture.clone()),
    })
    .exec_without_returning(txn)
    .await?;

    attach_profile_contacts(txn, profile_id, &profile.contacts).await
}

async fn insert_experience(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    position: i32,
    experience: &Experience,
) -> Result<(), DbErr> {
    let experience_id = Uuid::new_v4();

    experiences::Entity::insert(experiences::ActiveModel {
        id: Set(experience_id),
        portfolio_id: Set(portfolio_id),
        position: Set(position),
        company_name: Set(experience.company_name.clone()),
        company_description: Set(experience.company_description.clone()),
        start_date: Set(experience.start_date.clone()),
        end_date: Set(experience.end_date.clone()),
        role: Set(experience.role.as_str().to_string()),
        job_type: Set(experience.job_type.as_str().to_string()),
    })
    .exec_without_returning(txn)
    .await?;

    attach_experience_contacts(txn, experience_id, &experience.contacts).await
}

async fn insert_project(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    position: i32,
    project: &Project,
) -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();

    projects::Entity::insert(projects::ActiveModel {
        id: Set(project_id),
        portfolio_id: Set(portfolio_id),
        position: Set(position),
        title: Set(project.title.clone()),
        description: Set(project.description.clone()),
        link: Set(optional_link(project.link.clone())),
    })
    .exec_without_returning(txn)
    .await?;

    insert_features(txn, project_id, &project.features).await
}

async fn insert_features(
    txn: &DatabaseTransaction,
    project_id: Uuid,
    features: &[Feature],
) -> Result<(), DbErr> {
    for (i, feature) in features.iter().enumerate() {
        let feature_id = Uuid::new_v4();

        features::Entity::insert(features::ActiveModel {
            id: Set(feature_id),
            project_id: Set(project_id),
            position: Set(position(i)),
            title: Set(feature.title.clone()),
            description: Set(feature.description.clone()),
        })
        .exec_without_returning(txn)
        .await?;

        let stack_ids = upsert_tech_stacks(txn, &feature.tech_stacks).await?;
        if !stack_ids.is_empty() {
            feature_tech_stacks::Entity::insert_many(stack_ids.into_iter().enumerate().map(
                |(i, tech_stack_id)| feature_tech_stacks::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    feature_id: Set(feature_id),
                    tech_stack_id: Set(tech_stack_id),
                    position: Set(position(i)),
                },
            ))
            .exec_without_returning(txn)
            .await?;
        }
    }
    Ok(())
}

async fn insert_blog(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    at: i32,
    blog: &Blog,
) -> Result<(), DbErr> {
    let blog_id = Uuid::new_v4();

    blogs::Entity::insert(blogs::ActiveModel {
        id: Set(blog_id),
        portfolio_id: Set(portfolio_id),
        position: Set(at),
        title: Set(blog.title.clone()),
        link: Set(blog.link.clone()),
        description: Set(blog.description.clone()),
    })
    .exec_without_returning(txn)
    .await?;

    let stack_ids = upsert_tech_stacks(txn, &blog.tech_stacks).await?;
    if !stack_ids.is_empty() {
        blog_tech_stacks::Entity::insert_many(stack_ids.into_iter().enumerate().map(
            |(i, tech_stack_id)| blog_tech_stacks::ActiveModel {
                id: Set(Uuid::new_v4()),
                blog_id: Set(blog_id),
                tech_stack_id: Set(tech_stack_id),
                position: Set(position(i)),
            },
        ))
        .exec_without_returning(txn)
        .await?;
    }
    Ok(())
}

async fn insert_skills(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    skills: &[Skill],
) -> Result<(), DbErr> {
    if skills.is_empty() {
        return Ok(());
    }
    skills::Entity::insert_many(skills.iter().enumerate().map(|(i, skill)| {
        skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(portfolio_id),
            position: Set(position(i)),
            title: Set(skill.title.clone()),
            category: Set(skill.category.clone()),
        }
    }))
    .exec_without_returning(txn)
    .await
    .map(|_| ())
}

async fn insert_tools(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    tools: &[Tool],
) -> Result<(), DbErr> {
    if tools.is_empty() {
        return Ok(());
    }
    tools::Entity::insert_many(tools.iter().enumerate().map(|(i, tool)| tools::ActiveModel {
        id: Set(Uuid::new_v4()),
        portfolio_id: Set(portfolio_id),
        position: Set(position(i)),
        title: Set(tool.title.clone()),
    }))
    .exec_without_returning(txn)
    .await
    .map(|_| ())
}

/// Inserts missing stacks by `key` (the title stands in for a blank key) and
/// returns row ids in input order. An existing row keeps its stored fields.
async fn upsert_tech_stacks(
    txn: &DatabaseTransaction,
    stacks: &[TechStack],
) -> Result<Vec<Uuid>, DbErr> {
    let mut ids = Vec::with_capacity(stacks.len());
    for stack in stacks {
        let key = stack.identity().to_string();

        tech_stacks::Entity::insert(tech_stacks::ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(key.clone()),
            title: Set(stack.title.clone()),
            icon: Set(stack.icon.clone()),
            level: Set(stack.level.as_str().to_string()),
            priority: Set(stack.priority.as_str().to_string()),
            stack_type: Set(stack.stack_type.as_str().to_string()),
        })
        .on_conflict(
            OnConflict::column(tech_stacks::Column::Key)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

        let row = tech_stacks::Entity::find()
            .filter(tech_stacks::Column::Key.eq(key.as_str()))
            .one(txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("tech stack {key}")))?;
        ids.push(row.id);
    }
    Ok(ids)
}

// ============================================================================
// Contacts
// ============================================================================

/// Inserts fresh contact rows and returns their ids in input order.
async fn insert_contacts(txn: &DatabaseTransaction, list: &[Contact]) -> Result<Vec<Uuid>, DbErr> {
    if list.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = list.iter().map(|_| Uuid::new_v4()).collect();

    contacts::Entity::insert_many(list.iter().zip(&ids).map(|(contact, id)| {
        contacts::ActiveModel {
            id: Set(*id),
            name: Set(contact.name.clone()),
            icon: Set(contact.icon.clone()),
            link: Set(contact.link.clone()),
        }
    }))
    .exec_without_returning(txn)
    .await?;

    Ok(ids)
}

async fn attach_profile_contacts(
    txn: &DatabaseTransaction,
    profile_id: Uuid,
    list: &[Contact],
) -> Result<(), DbErr> {
    let ids = insert_contacts(txn, list).await?;
    if ids.is_empty() {
        return Ok(());
    }
    profile_contacts::Entity::insert_many(ids.into_iter().enumerate().map(|(i, contact_id)| {
        profile_contacts::ActiveModel {
            id: Set(Uuid::new_v4()),
            profile_id: Set(profile_id),
            contact_id: Set(contact_id),
            position: Set(position(i)),
        }
    }))
    .exec_without_returning(txn)
    .await
    .map(|_| ())
}

async fn attach_portfolio_contacts(
    txn: &DatabaseTransaction,
    portfolio_id: Uuid,
    list: &[Contact],
) -> Result<(), DbErr> {
    let ids = insert_contacts(txn, list).await?;
    if ids.is_empty() {
        return Ok(());
    }
    portfolio_contacts::Entity::insert_many(ids.into_iter().enumerate().map(|(i, contact_id)| {
        portfolio_contacts::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(portfolio_id),
            contact_id: Set(contact_id),
            position: Set(position(i)),
        }
    }))
    .exec_without_returning(txn)
    .await
    .map(|_| ())
}

async fn attach_experience_contacts(
    txn: &DatabaseTransaction,
    experience_id: Uuid,
    list: &[Contact],
) -> Result<(), DbErr> {
    let ids = insert_contacts(txn, list).await?;
    if ids.is_empty() {
        return Ok(());
    }
    experience_contacts::Entity::insert_many(ids.into_iter().enumerate().map(|(i, contact_id)| {
        experience_contacts::ActiveModel {
            id: Set(Uuid::new_v4()),
            experience_id: Set(experience_id),
            contact_id: Set(contact_id),
            position: Set(position(i)),
        }
    }))
    .exec_without_returning(txn)
    .await
    .map(|_| ())
}

// ============================================================================
// Helpers
// ============================================================================

fn position(index: usize) -> i32 {
    index as i32
}

fn set_if<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

fn optional_link(link: String) -> Option<String> {
    if link.trim().is_empty() {
        None
    } else {
        Some(link)
    }
}

fn map_external_id_error(e: DbErr) -> PortfolioRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("external_id")
    {
        PortfolioRepositoryError::ExternalIdTaken
    } else {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
