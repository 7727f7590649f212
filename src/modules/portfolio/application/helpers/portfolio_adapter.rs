// src/modules/portfolio/application/helpers/portfolio_adapter.rs

use std::collections::HashSet;

use crate::modules::portfolio::application::ports::outgoing::raw_portfolio::{
    JoinRecord, RawBlog, RawContact, RawExperience, RawFeature, RawPortfolio, RawProfile,
    RawProject, RawTechStack,
};
use crate::modules::portfolio::domain::enums::UnknownVariant;
use crate::modules::portfolio::domain::{
    Blog, Contact, Experience, Feature, Portfolio, Profile, Project, Skill, TechStack, Tool,
};

pub const PLACEHOLDER_PROFILE_PICTURE: &str = "/placeholder-user.jpg";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdaptError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

impl From<UnknownVariant> for AdaptError {
    fn from(err: UnknownVariant) -> Self {
        AdaptError::InvalidValue {
            field: err.kind,
            value: err.value,
        }
    }
}

/// Builds the domain model from a join-wrapped payload.
///
/// Absent collections become empty. Only the profile identity (`full_name`,
/// `email`) is required; enum-like strings must name a known variant.
pub fn adapt(raw: &RawPortfolio) -> Result<Portfolio, AdaptError> {
    let profile = adapt_profile(raw.profile.as_ref())?;

    let projects = each(&raw.projects, adapt_project)?;
    let experience = each(&raw.experience, adapt_experience)?;
    let skills = each(&raw.skills, |s| {
        Ok(Skill {
            title: s.title.clone(),
            category: s.category.clone().filter(|c| !c.trim().is_empty()),
        })
    })?;
    let tools = each(&raw.tools, |t| {
        Ok(Tool {
            title: t.title.clone(),
        })
    })?;
    let blogs = each(&raw.blogs, adapt_blog)?;
    let contacts = unwrap_joins(&raw.contacts, adapt_contact)?;

    let tech_stacks = aggregate_tech_stacks(&projects, &blogs);

    Ok(Portfolio {
        external_id: raw.external_id.clone().unwrap_or_default(),
        profile,
        projects,
        experience,
        skills,
        tools,
        blogs,
        contacts,
        tech_stacks,
    })
}

/// Unwraps join rows to their referenced entity, in order.
pub fn unwrap_joins<J, T, F>(records: &Option<Vec<J>>, convert: F) -> Result<Vec<T>, AdaptError>
where
    J: JoinRecord,
    F: Fn(&J::Target) -> Result<T, AdaptError>,
{
    each(records, |record| convert(record.target()))
}

fn each<S, T, F>(items: &Option<Vec<S>>, convert: F) -> Result<Vec<T>, AdaptError>
where
    F: Fn(&S) -> Result<T, AdaptError>,
{
    items
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(convert)
        .collect()
}

/// Portfolio-level tech stacks: every stack reachable through project features,
/// then through blogs. The first occurrence of an identity wins.
pub fn aggregate_tech_stacks(projects: &[Project], blogs: &[Blog]) -> Vec<TechStack> {
    let from_features = projects
        .iter()
        .flat_map(|p| p.features.iter())
        .flat_map(|f| f.tech_stacks.iter());
    let from_blogs = blogs.iter().flat_map(|b| b.tech_stacks.iter());

    let mut seen = HashSet::new();
    from_features
        .chain(from_blogs)
        .filter(|stack| seen.insert(stack.identity().to_string()))
        .cloned()
        .collect()
}

fn adapt_profile(raw: Option<&RawProfile>) -> Result<Profile, AdaptError> {
    let raw = raw.ok_or(AdaptError::MissingField("profile"))?;

    Ok(Profile {
        full_name: required(&raw.full_name, "profile.full_name")?,
        email: required(&raw.email, "profile.email")?,
        phone_number: raw.phone_number.clone().unwrap_or_default(),
        address: raw.address.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        profile_picture: raw
            .profile_picture
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_PROFILE_PICTURE.to_string()),
        contacts: unwrap_joins(&raw.contacts, adapt_contact)?,
    })
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, AdaptError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(AdaptError::MissingField(field)),
    }
}

fn adapt_contact(raw: &RawContact) -> Result<Contact, AdaptError> {
    Ok(Contact {
        name: raw.name.clone(),
        icon: raw.icon.clone(),
        link: raw.link.clone(),
    })
}

fn adapt_tech_stack(raw: &RawTechStack) -> Result<TechStack, AdaptError> {
    Ok(TechStack {
        title: raw.title.clone(),
        key: raw.key.clone(),
        icon: raw.icon.clone(),
        level: raw.level.parse()?,
        priority: raw.priority.parse()?,
        stack_type: raw.stack_type.parse()?,
    })
}

fn adapt_feature(raw: &RawFeature) -> Result<Feature, AdaptError> {
    Ok(Feature {
        title: raw.title.clone(),
        description: raw.description.clone(),
        tech_stacks: unwrap_joins(&raw.tech_stacks, adapt_tech_stack)?,
    })
}

fn adapt_project(raw: &RawProject) -> Result<Project, AdaptError> {
    Ok(Project {
        title: raw.title.clone(),
        description: raw.description.clone(),
        link: raw.link.clone().unwrap_or_default(),
        features: each(&raw.features, adapt_feature)?,
    })
}

fn adapt_experience(raw: &RawExperience) -> Result<Experience, AdaptError> {
    Ok(Experience {
        company_name: raw.company_name.clone(),
        company_description: raw.company_description.clone(),
        start_date: raw.start_date.clone(),
        end_date: raw.end_date.clone().filter(|d| !d.is_empty()),
        role: raw.role.parse()?,
        job_type: raw.job_type.parse()?,
        contacts: unwrap_joins(&raw.contacts, adapt_contact)?,
    })
}

fn adapt_blog(raw: &RawBlog) -> Result<Blog, AdaptError> {
    Ok(Blog {
        title: raw.title.clone(),
        link: raw.link.clone(),
        description: raw.description.clone().filter(|d| !d.is_empty()),
        tech_stacks: unwrap_joins(&raw.tech_stacks, adapt_tech_stack)?,
    })
}
