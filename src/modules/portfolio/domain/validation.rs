use email_address::EmailAddress;

use super::entities::{Experience, Profile, Project, Skill, Tool};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("externalId may only contain letters, digits, '-' and '_'")]
    InvalidExternalId,
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty(field))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require_text("email", email)?;
    if EmailAddress::is_valid(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Public identifiers appear in URLs.
pub fn validate_external_id(external_id: &str) -> Result<(), ValidationError> {
    require_text("externalId", external_id)?;
    let valid = external_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidExternalId)
    }
}

pub fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    require_text("full_name", &profile.full_name)?;
    validate_email(&profile.email)
}

pub fn validate_experience(experience: &Experience) -> Result<(), ValidationError> {
    require_text("company_name", &experience.company_name)?;
    require_text("start_date", &experience.start_date)
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    require_text("title", &project.title)
}

pub fn validate_skills(skills: &[Skill]) -> Result<(), ValidationError> {
    skills.iter().try_for_each(|s| require_text("skill title", &s.title))
}

pub fn validate_tools(tools: &[Tool]) -> Result<(), ValidationError> {
    tools.iter().try_for_each(|t| require_text("tool title", &t.title))
}
