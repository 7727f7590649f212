use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::enums::{JobType, Priority, ProgrammingLevel, ProgrammingRole, ProjectType};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Contact {
    pub name: String,
    pub icon: String,
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TechStack {
    pub title: String,
    /// Stable slug; identity of the technology across features and blogs.
    pub key: String,
    pub icon: String,
    pub level: ProgrammingLevel,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub stack_type: ProjectType,
}

impl TechStack {
    /// Dedup identity: `key`, or `title` when the key is blank.
    pub fn identity(&self) -> &str {
        if self.key.is_empty() {
            &self.title
        } else {
            &self.key
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(rename = "techStacks", default)]
    pub tech_stacks: Vec<TechStack>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Experience {
    pub company_name: String,
    pub company_description: String,
    pub start_date: String,
    /// `null` means the position is ongoing. The key itself must be present.
    #[serde(deserialize_with = "required_nullable")]
    pub end_date: Option<String>,
    pub role: ProgrammingRole,
    pub job_type: JobType,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Skill {
    pub title: String,
    /// Optional grouping label.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Tool {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Blog {
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "techStacks", default)]
    pub tech_stacks: Vec<TechStack>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub description: String,
    pub profile_picture: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Root aggregate, denormalized for rendering and export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Portfolio {
    #[serde(rename = "externalId")]
    pub external_id: String,
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Derived from project features and blogs, unique by key.
    #[serde(rename = "techStacks", default)]
    pub tech_stacks: Vec<TechStack>,
}

// Without a custom deserializer serde treats a missing Option field as None.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
