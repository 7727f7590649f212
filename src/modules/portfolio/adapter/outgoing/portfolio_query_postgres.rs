// src/modules/portfolio/adapter/outgoing/portfolio_query_postgres.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    blog_tech_stacks, blogs, contacts, experience_contacts, experiences, feature_tech_stacks,
    features, portfolio_contacts, portfolios, profile_contacts, profiles, projects, skills,
    tech_stacks, tools,
};
use crate::modules::portfolio::application::ports::outgoing::raw_portfolio::{
    ContactLink, RawBlog, RawContact, RawExperience, RawFeature, RawProfile, RawProject,
    RawSkill, RawTechStack, RawTool, TechStackLink,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioListItem, PortfolioQuery, PortfolioQueryError, RawPortfolio,
};

// ============================================================================
// Query Implementation
// ============================================================================

/// Reads portfolios back in the join-wrapped shape the adapter expects.
///
/// Every ordered collection is sorted by `position`, then `id`. Many-to-many
/// rows (contacts, tech stacks) are loaded in one batch per table and wrapped
/// into link records.
#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(
        &self,
        portfolio: Option<portfolios::Model>,
    ) -> Result<Option<RawPortfolio>, PortfolioQueryError> {
        match portfolio {
            Some(row) => load_raw_portfolio(&*self.db, row)
                .await
                .map(Some)
                .map_err(map_db_err),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn list(&self) -> Result<Vec<PortfolioListItem>, PortfolioQueryError> {
        let rows = portfolios::Entity::find()
            .order_by_asc(portfolios::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut profile_by_portfolio: HashMap<Uuid, profiles::Model> = profiles::Entity::find()
            .filter(profiles::Column::PortfolioId.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.portfolio_id, p))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let (full_name, email) = profile_by_portfolio
                    .remove(&row.id)
                    .map(|p| (p.full_name, p.email))
                    .unwrap_or_default();

                PortfolioListItem {
                    id: row.id,
                    external_id: row.external_id,
                    full_name,
                    email,
                    created_at: row.created_at.with_timezone(&Utc),
                    updated_at: row.updated_at.with_timezone(&Utc),
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RawPortfolio>, PortfolioQueryError> {
        let row = portfolios::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.load(row).await
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<RawPortfolio>, PortfolioQueryError> {
        let row = portfolios::Entity::find()
            .filter(portfolios::Column::ExternalId.eq(external_id.trim()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.load(row).await
    }

    async fn find_first(&self) -> Result<Option<RawPortfolio>, PortfolioQueryError> {
        let row = portfolios::Entity::find()
            .order_by_asc(portfolios::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.load(row).await
    }

    async fn external_id_exists(&self, external_id: &str) -> Result<bool, PortfolioQueryError> {
        // one() rather than count(): count() cannot be fed through MockDatabase
        let row = portfolios::Entity::find()
            .filter(portfolios::Column::ExternalId.eq(external_id.trim()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.is_some())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Query order: profile, profile contacts, portfolio contacts, experience
/// (+ contacts), projects (+ features, + feature stacks), blogs (+ stacks),
/// skills, tools, then the referenced contacts and tech stacks. Child tables
/// are skipped when their parent list is empty.
async fn load_raw_portfolio<C: ConnectionTrait>(
    conn: &C,
    portfolio: portfolios::Model,
) -> Result<RawPortfolio, DbErr> {
    let profile = profiles::Entity::find()
        .filter(profiles::Column::PortfolioId.eq(portfolio.id))
        .one(conn)
        .await?;

    let profile_links = match &profile {
        Some(p) => {
            profile_contacts::Entity::find()
                .filter(profile_contacts::Column::ProfileId.eq(p.id))
                .order_by_asc(profile_contacts::Column::Position)
                .order_by_asc(profile_contacts::Column::Id)
                .all(conn)
                .await?
        }
        None => Vec::new(),
    };

    let portfolio_links = portfolio_contacts::Entity::find()
        .filter(portfolio_contacts::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(portfolio_contacts::Column::Position)
        .order_by_asc(portfolio_contacts::Column::Id)
        .all(conn)
        .await?;

    let experience_rows = experiences::Entity::find()
        .filter(experiences::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(experiences::Column::Position)
        .order_by_asc(experiences::Column::Id)
        .all(conn)
        .await?;

    let experience_links = if experience_rows.is_empty() {
        Vec::new()
    } else {
        experience_contacts::Entity::find()
            .filter(
                experience_contacts::Column::ExperienceId
                    .is_in(experience_rows.iter().map(|e| e.id)),
            )
            .order_by_asc(experience_contacts::Column::Position)
            .order_by_asc(experience_contacts::Column::Id)
            .all(conn)
            .await?
    };

    let project_rows = projects::Entity::find()
        .filter(projects::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(projects::Column::Position)
        .order_by_asc(projects::Column::Id)
        .all(conn)
        .await?;

    let feature_rows = if project_rows.is_empty() {
        Vec::new()
    } else {
        features::Entity::find()
            .filter(features::Column::ProjectId.is_in(project_rows.iter().map(|p| p.id)))
            .order_by_asc(features::Column::Position)
            .order_by_asc(features::Column::Id)
            .all(conn)
            .await?
    };

    let feature_links = if feature_rows.is_empty() {
        Vec::new()
    } else {
        feature_tech_stacks::Entity::find()
            .filter(feature_tech_stacks::Column::FeatureId.is_in(feature_rows.iter().map(|f| f.id)))
            .order_by_asc(feature_tech_stacks::Column::Position)
            .order_by_asc(feature_tech_stacks::Column::Id)
            .all(conn)
            .await?
    };

    let blog_rows = blogs::Entity::find()
        .filter(blogs::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(blogs::Column::Position)
        .order_by_asc(blogs::Column::Id)
        .all(conn)
        .await?;

    let blog_links = if blog_rows.is_empty() {
        Vec::new()
    } else {
        blog_tech_stacks::Entity::find()
            .filter(blog_tech_stacks::Column::BlogId.is_in(blog_rows.iter().map(|b| b.id)))
            .order_by_asc(blog_tech_stacks::Column::Position)
            .order_by_asc(blog_tech_stacks::Column::Id)
            .all(conn)
            .await?
    };

    let skill_rows = skills::Entity::find()
        .filter(skills::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(skills::Column::Position)
        .order_by_asc(skills::Column::Id)
        .all(conn)
        .await?;

    let tool_rows = tools::Entity::find()
        .filter(tools::Column::PortfolioId.eq(portfolio.id))
        .order_by_asc(tools::Column::Position)
        .order_by_asc(tools::Column::Id)
        .all(conn)
        .await?;

    let contact_ids: Vec<Uuid> = profile_links
        .iter()
        .map(|l| l.contact_id)
        .chain(portfolio_links.iter().map(|l| l.contact_id))
        .chain(experience_links.iter().map(|l| l.contact_id))
        .collect();
    let contact_by_id: HashMap<Uuid, RawContact> = if contact_ids.is_empty() {
        HashMap::new()
    } else {
        contacts::Entity::find()
            .filter(contacts::Column::Id.is_in(contact_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|c| (c.id, contact_to_raw(c)))
            .collect()
    };

    let stack_ids: Vec<Uuid> = feature_links
        .iter()
        .map(|l| l.tech_stack_id)
        .chain(blog_links.iter().map(|l| l.tech_stack_id))
        .collect();
    let stack_by_id: HashMap<Uuid, RawTechStack> = if stack_ids.is_empty() {
        HashMap::new()
    } else {
        tech_stacks::Entity::find()
            .filter(tech_stacks::Column::Id.is_in(stack_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|s| (s.id, tech_stack_to_raw(s)))
            .collect()
    };

    let contact_links = |owned: Vec<Uuid>| -> Vec<ContactLink> {
        owned
            .into_iter()
            .filter_map(|id| contact_by_id.get(&id).cloned())
            .map(|contact| ContactLink { contact })
            .collect()
    };
    let stack_links = |owned: Vec<Uuid>| -> Vec<TechStackLink> {
        owned
            .into_iter()
            .filter_map(|id| stack_by_id.get(&id).cloned())
            .map(|tech_stack| TechStackLink { tech_stack })
            .collect()
    };

    let raw_profile = profile.map(|p| RawProfile {
        full_name: Some(p.full_name),
        email: Some(p.email),
        phone_number: Some(p.phone_number),
        address: Some(p.address),
        description: Some(p.description),
        profile_picture: Some(p.profile_picture),
        contacts: Some(contact_links(
            profile_links.iter().map(|l| l.contact_id).collect(),
        )),
    });

    let experience = experience_rows
        .into_iter()
        .map(|e| {
            let owned = children_of(&experience_links, e.id, |l| {
                (l.experience_id, l.contact_id)
            });
            RawExperience {
                company_name: e.company_name,
                company_description: e.company_description,
                start_date: e.start_date,
                end_date: e.end_date,
                role: e.role,
                job_type: e.job_type,
                contacts: Some(contact_links(owned)),
            }
        })
        .collect();

    let projects = project_rows
        .into_iter()
        .map(|p| {
            let features = feature_rows
                .iter()
                .filter(|f| f.project_id == p.id)
                .map(|f| RawFeature {
                    title: f.title.clone(),
                    description: f.description.clone(),
                    tech_stacks: Some(stack_links(children_of(&feature_links, f.id, |l| {
                        (l.feature_id, l.tech_stack_id)
                    }))),
                })
                .collect();
            RawProject {
                title: p.title,
                description: p.description,
                link: p.link,
                features: Some(features),
            }
        })
        .collect();

    let blogs = blog_rows
        .into_iter()
        .map(|b| RawBlog {
            tech_stacks: Some(stack_links(children_of(&blog_links, b.id, |l| {
                (l.blog_id, l.tech_stack_id)
            }))),
            title: b.title,
            link: b.link,
            description: b.description,
        })
        .collect();

    Ok(RawPortfolio {
        id: Some(portfolio.id),
        external_id: Some(portfolio.external_id),
        profile: raw_profile,
        projects: Some(projects),
        experience: Some(experience),
        skills: Some(
            skill_rows
                .into_iter()
                .map(|s| RawSkill {
                    title: s.title,
                    category: s.category,
                })
                .collect(),
        ),
        tools: Some(tool_rows.into_iter().map(|t| RawTool { title: t.title }).collect()),
        blogs: Some(blogs),
        contacts: Some(contact_links(
            portfolio_links.iter().map(|l| l.contact_id).collect(),
        )),
    })
}

/// Target ids of the join rows owned by `owner`, in position order.
fn children_of<L>(links: &[L], owner: Uuid, ids: impl Fn(&L) -> (Uuid, Uuid)) -> Vec<Uuid> {
    links
        .iter()
        .map(ids)
        .filter(|(parent, _)| *parent == owner)
        .map(|(_, target)| target)
        .collect()
}

fn contact_to_raw(model: contacts::Model) -> RawContact {
    RawContact {
        name: model.name,
        icon: model.icon,
        link: model.link,
    }
}

fn tech_stack_to_raw(model: tech_stacks::Model) -> RawTechStack {
    RawTechStack {
        title: model.title,
        key: model.key,
        icon: model.icon,
        level: model.level,
        priority: model.priority,
        stack_type: model.stack_type,
    }
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
