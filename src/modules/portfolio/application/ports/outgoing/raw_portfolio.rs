// src/modules/portfolio/application/ports/outgoing/raw_portfolio.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Join records
// ──────────────────────────────────────────────────────────
// Many-to-many relations arrive as wrapper rows around the referenced entity,
// e.g. `{ "contact": { ... } }` instead of the contact itself.
//

pub trait JoinRecord {
    type Target;

    /// The referenced entity held by this join row.
    fn target(&self) -> &Self::Target;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub contact: RawContact,
}

impl JoinRecord for ContactLink {
    type Target = RawContact;

    fn target(&self) -> &RawContact {
        &self.contact
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechStackLink {
    #[serde(rename = "techStack")]
    pub tech_stack: RawTechStack,
}

impl JoinRecord for TechStackLink {
    type Target = RawTechStack;

    fn target(&self) -> &RawTechStack {
        &self.tech_stack
    }
}

//
// ──────────────────────────────────────────────────────────
// Persistence-shaped payload
// ──────────────────────────────────────────────────────────
// Enum-like columns stay plain strings here; they are parsed (and rejected
// when unknown) by the adapter.
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTechStack {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub priority: String,
    #[serde(rename = "type", default)]
    pub stack_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "techStacks", default)]
    pub tech_stacks: Option<Vec<TechStackLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<RawFeature>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExperience {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub contacts: Option<Vec<ContactLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSkill {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTool {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "techStacks", default)]
    pub tech_stacks: Option<Vec<TechStackLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub contacts: Option<Vec<ContactLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPortfolio {
    /// Internal row id. Never copied into the domain model.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(rename = "externalId", default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub profile: Option<RawProfile>,
    #[serde(default)]
    pub projects: Option<Vec<RawProject>>,
    #[serde(default)]
    pub experience: Option<Vec<RawExperience>>,
    #[serde(default)]
    pub skills: Option<Vec<RawSkill>>,
    #[serde(default)]
    pub tools: Option<Vec<RawTool>>,
    #[serde(default)]
    pub blogs: Option<Vec<RawBlog>>,
    #[serde(default)]
    pub contacts: Option<Vec<ContactLink>>,
}
