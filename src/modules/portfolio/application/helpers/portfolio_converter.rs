// src/modules/portfolio/application/helpers/portfolio_converter.rs

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::portfolio::domain::{Experience, Portfolio, Skill, TechStack};

const PRESENT: &str = "Present";
const DEFAULT_SKILL_GROUP: &str = "Other";

//
// ──────────────────────────────────────────────────────────
// Formats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
    Csv,
    Summary,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Summary => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
            ExportFormat::Summary => "txt",
        }
    }

    fn filename_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Summary => "summary",
            _ => "portfolio",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Csv => "csv",
            ExportFormat::Summary => "summary",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "markdown" => Ok(ExportFormat::Markdown),
            "csv" => Ok(ExportFormat::Csv),
            "summary" => Ok(ExportFormat::Summary),
            other => Err(ConvertError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A rendered file ready to be handed to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Converter
// ──────────────────────────────────────────────────────────
// Renders one portfolio snapshot. Build a new converter after a mutation.
//

pub struct PortfolioConverter<'a> {
    portfolio: &'a Portfolio,
}

impl<'a> PortfolioConverter<'a> {
    pub fn new(portfolio: &'a Portfolio) -> Self {
        Self { portfolio }
    }

    pub fn to_json(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self.portfolio)
            .map_err(|e| ConvertError::Serialization(e.to_string()))
    }

    /// Inverse of [`PortfolioConverter::to_json`].
    pub fn parse_json(input: &str) -> Result<Portfolio, ConvertError> {
        serde_json::from_str(input).map_err(|e| ConvertError::Serialization(e.to_string()))
    }

    pub fn to_markdown(&self) -> String {
        let p = self.portfolio;
        let profile = &p.profile;

        let mut md = format!("# {}\n\n", profile.full_name);
        md.push_str(&format!("**{}**\n\n", profile.description));
        md.push_str(&format!(
            "📧 {} | 📱 {} | 📍 {}\n\n",
            profile.email, profile.phone_number, profile.address
        ));

        if !p.contacts.is_empty() {
            md.push_str("## Contact & Social Links\n\n");
            for contact in &p.contacts {
                md.push_str(&format!(
                    "- **{}**: [{}]({})\n",
                    contact.name, contact.link, contact.link
                ));
            }
            md.push('\n');
        }

        if !p.experience.is_empty() {
            md.push_str("## Professional Experience\n\n");
            for (i, exp) in p.experience.iter().enumerate() {
                md.push_str(&format!(
                    "### {}. {} at {}\n\n",
                    i + 1,
                    exp.role,
                    exp.company_name
                ));
                md.push_str(&format!(
                    "**Duration**: {} - {}\n",
                    exp.start_date,
                    end_date_label(exp)
                ));
                md.push_str(&format!("**Type**: {}\n\n", exp.job_type));
                md.push_str(&format!("{}\n\n", exp.company_description));
                md.push_str("---\n\n");
            }
        }

        if !p.projects.is_empty() {
            md.push_str("## Key Projects\n\n");
            for (i, project) in p.projects.iter().enumerate() {
                md.push_str(&format!("### {}. {}\n\n", i + 1, project.title));
                md.push_str(&format!("{}\n\n", project.description));

                if !project.link.is_empty() {
                    md.push_str(&format!(
                        "🔗 **Project Link**: [{}]({})\n\n",
                        project.link, project.link
                    ));
                }

                if !project.features.is_empty() {
                    md.push_str("**Key Features:**\n");
                    for feature in &project.features {
                        md.push_str(&format!(
                            "- **{}**: {}\n",
                            feature.title, feature.description
                        ));
                        if !feature.tech_stacks.is_empty() {
                            let titles: Vec<&str> =
                                feature.tech_stacks.iter().map(|t| t.title.as_str()).collect();
                            md.push_str(&format!("  - *Technologies*: {}\n", titles.join(", ")));
                        }
                    }
                    md.push('\n');
                }
                md.push_str("---\n\n");
            }
        }

        if !p.skills.is_empty() {
            md.push_str("## Technical Skills\n\n");
            for (group, skills) in group_by(&p.skills, skill_group) {
                md.push_str(&format!("### {group}\n"));
                for skill in skills {
                    md.push_str(&format!("- {}\n", skill.title));
                }
                md.push('\n');
            }
        }

        if !p.tools.is_empty() {
            md.push_str("## Tools & Technologies\n\n");
            for tool in &p.tools {
                md.push_str(&format!("- {}\n", tool.title));
            }
            md.push('\n');
        }

        if !p.tech_stacks.is_empty() {
            md.push_str("## Tech Stack Details\n\n");
            for (group, stacks) in group_by(&p.tech_stacks, tech_stack_group) {
                md.push_str(&format!("### {group}\n"));
                for stack in stacks {
                    md.push_str(&format!("- **{}** ({})\n", stack.title, stack.level));
                }
                md.push('\n');
            }
        }

        if !p.blogs.is_empty() {
            md.push_str("## Blog Posts & Articles\n\n");
            for blog in &p.blogs {
                md.push_str(&format!("- [{}]({})\n", blog.title, blog.link));
                if let Some(description) = blog.description.as_deref().filter(|d| !d.is_empty()) {
                    md.push_str(&format!("  - {description}\n"));
                }
            }
            md.push('\n');
        }

        md
    }

    pub fn to_csv(&self) -> String {
        let p = self.portfolio;
        let profile = &p.profile;

        let mut csv = String::from("Section,Field,Value\n");
        for (field, value) in [
            ("Full Name", &profile.full_name),
            ("Email", &profile.email),
            ("Phone", &profile.phone_number),
            ("Address", &profile.address),
            ("Description", &profile.description),
        ] {
            csv.push_str(&format!("Profile,{},{}\n", field, quote(value)));
        }
        csv.push('\n');

        if !p.experience.is_empty() {
            csv.push_str("Section,Company,Role,Job Type,Start Date,End Date,Description\n");
            for exp in &p.experience {
                csv.push_str(&format!(
                    "Experience,{},{},{},{},{},{}\n",
                    quote(&exp.company_name),
                    quote(exp.role.as_str()),
                    quote(exp.job_type.as_str()),
                    quote(&exp.start_date),
                    quote(end_date_label(exp)),
                    quote(&exp.company_description),
                ));
            }
            csv.push('\n');
        }

        if !p.projects.is_empty() {
            csv.push_str("Section,Title,Description,Link\n");
            for project in &p.projects {
                csv.push_str(&format!(
                    "Project,{},{},{}\n",
                    quote(&project.title),
                    quote(&project.description),
                    quote(&project.link),
                ));
            }
            csv.push('\n');
        }

        if !p.skills.is_empty() {
            csv.push_str("Section,Skill\n");
            for skill in &p.skills {
                csv.push_str(&format!("Skill,{}\n", quote(&skill.title)));
            }
            csv.push('\n');
        }

        if !p.tools.is_empty() {
            csv.push_str("Section,Tool\n");
            for tool in &p.tools {
                csv.push_str(&format!("Tool,{}\n", quote(&tool.title)));
            }
            csv.push('\n');
        }

        if !p.tech_stacks.is_empty() {
            csv.push_str("Section,Technology,Type,Level\n");
            for stack in &p.tech_stacks {
                csv.push_str(&format!(
                    "Tech Stack,{},{},{}\n",
                    quote(&stack.title),
                    quote(stack.stack_type.as_str()),
                    quote(stack.level.as_str()),
                ));
            }
            csv.push('\n');
        }

        // last table: no trailing blank line
        if !p.blogs.is_empty() {
            csv.push_str("Section,Title,Link,Description\n");
            for blog in &p.blogs {
                csv.push_str(&format!(
                    "Blog,{},{},{}\n",
                    quote(&blog.title),
                    quote(&blog.link),
                    quote(blog.description.as_deref().unwrap_or_default()),
                ));
            }
        }

        csv
    }

    pub fn to_summary(&self) -> String {
        let p = self.portfolio;
        let profile = &p.profile;

        let mut summary = format!("Portfolio Summary for {}\n", profile.full_name);
        summary.push_str(&"=".repeat(37));
        summary.push_str("\n\n");
        summary.push_str(&format!("📧 {}\n", profile.email));
        summary.push_str(&format!("📍 {}\n\n", profile.address));
        summary.push_str(&format!("Professional Summary:\n{}\n\n", profile.description));

        summary.push_str("📊 Statistics:\n");
        for (label, count, unit) in [
            ("Experience", p.experience.len(), "positions"),
            ("Projects", p.projects.len(), "projects"),
            ("Skills", p.skills.len(), "skills"),
            ("Tools", p.tools.len(), "tools"),
            ("Tech Stacks", p.tech_stacks.len(), "technologies"),
            ("Blog Posts", p.blogs.len(), "articles"),
        ] {
            summary.push_str(&format!("- {label}: {count} {unit}\n"));
        }

        if !p.experience.is_empty() {
            summary.push_str("\n💼 Experience Timeline:\n");
            for exp in &p.experience {
                summary.push_str(&format!(
                    "- {} at {} ({} - {})\n",
                    exp.role,
                    exp.company_name,
                    exp.start_date,
                    end_date_label(exp)
                ));
            }
        }

        summary
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ConvertError> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Markdown => Ok(self.to_markdown()),
            ExportFormat::Csv => Ok(self.to_csv()),
            ExportFormat::Summary => Ok(self.to_summary()),
        }
    }

    /// Resolves content, MIME type and filename for a download. A blank
    /// `filename` falls back to the name derived from the profile.
    pub fn export(
        &self,
        format: ExportFormat,
        filename: Option<&str>,
    ) -> Result<ExportedFile, ConvertError> {
        let content = self.render(format)?;
        let filename = match filename.map(str::trim).filter(|f| !f.is_empty()) {
            Some(name) => name.to_string(),
            None => self.default_filename(format),
        };

        Ok(ExportedFile {
            filename,
            mime_type: format.mime_type(),
            content,
        })
    }

    pub fn default_filename(&self, format: ExportFormat) -> String {
        format!(
            "{}_{}.{}",
            whitespace_re().replace_all(&self.portfolio.profile.full_name, "_"),
            format.filename_suffix(),
            format.extension()
        )
    }
}

fn whitespace_re() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn end_date_label(exp: &Experience) -> &str {
    exp.end_date.as_deref().unwrap_or(PRESENT)
}

fn skill_group(skill: &Skill) -> &str {
    skill
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_SKILL_GROUP)
}

fn tech_stack_group(stack: &TechStack) -> &str {
    stack.stack_type.as_str()
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Groups items by label, keeping first-seen group order and item order.
fn group_by<'p, T, F>(items: &'p [T], label: F) -> Vec<(&'p str, Vec<&'p T>)>
where
    F: Fn(&'p T) -> &'p str,
{
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();
    for item in items {
        let key = label(item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::{
        Blog, Contact, Feature, JobType, Priority, Profile, ProgrammingLevel, ProgrammingRole,
        Project, ProjectType, Tool,
    };

    fn profile(full_name: &str) -> Profile {
        Profile {
            full_name: full_name.to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "+1 555 0100".to_string(),
            address: "Berlin".to_string(),
            description: "Backend engineer".to_string(),
            profile_picture: "/me.png".to_string(),
            contacts: vec![],
        }
    }

    fn empty_portfolio() -> Portfolio {
        Portfolio {
            external_id: "jane".to_string(),
            profile: profile("Jane Doe"),
            projects: vec![],
            experience: vec![],
            skills: vec![],
            tools: vec![],
            blogs: vec![],
            contacts: vec![],
            tech_stacks: vec![],
        }
    }

    fn acme(end_date: Option<&str>) -> Experience {
        Experience {
            company_name: "Acme".to_string(),
            company_description: "Rockets and anvils".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: end_date.map(str::to_string),
            role: ProgrammingRole::Backend,
            job_type: JobType::FullTime,
            contacts: vec![],
        }
    }

    fn stack(key: &str, title: &str, stack_type: ProjectType) -> TechStack {
        TechStack {
            title: title.to_string(),
            key: key.to_string(),
            icon: String::new(),
            level: ProgrammingLevel::Advanced,
            priority: Priority::Main,
            stack_type,
        }
    }

    fn full_portfolio() -> Portfolio {
        let react = stack("react", "React", ProjectType::Frontend);
        let rust = stack("rust", "Rust", ProjectType::Backend);
        Portfolio {
            projects: vec![Project {
                title: "CMS".to_string(),
                description: "Headless \"content\" service".to_string(),
                link: "https://cms.example".to_string(),
                features: vec![Feature {
                    title: "Export".to_string(),
                    description: "Downloads".to_string(),
                    tech_stacks: vec![react.clone(), rust.clone()],
                }],
            }],
            experience: vec![acme(None), acme(Some("2020-12-31"))],
            skills: vec![
                Skill {
                    title: "APIs".to_string(),
                    category: Some("Backend".to_string()),
                },
                Skill {
                    title: "Writing".to_string(),
                    category: None,
                },
            ],
            tools: vec![Tool {
                title: "git".to_string(),
            }],
            blogs: vec![Blog {
                title: "On Rust".to_string(),
                link: "https://blog.example/rust".to_string(),
                description: Some("Ownership notes".to_string()),
                tech_stacks: vec![rust.clone()],
            }],
            contacts: vec![Contact {
                name: "GitHub".to_string(),
                icon: "gh".to_string(),
                link: "https://github.com/jane".to_string(),
            }],
            tech_stacks: vec![react, rust],
            ..empty_portfolio()
        }
    }

    #[test]
    fn test_json_round_trip() {
        let portfolio = full_portfolio();
        let json = PortfolioConverter::new(&portfolio).to_json().unwrap();

        assert!(json.contains("\n  \"externalId\": \"jane\""));
        assert_eq!(PortfolioConverter::parse_json(&json).unwrap(), portfolio);
    }

    #[test]
    fn test_json_keeps_null_end_date() {
        let portfolio = full_portfolio();
        let json = PortfolioConverter::new(&portfolio).to_json().unwrap();

        assert!(json.contains("\"end_date\": null"));
    }

    #[test]
    fn test_markdown_jane_doe_scenario() {
        let portfolio = Portfolio {
            experience: vec![acme(None)],
            ..empty_portfolio()
        };

        let md = PortfolioConverter::new(&portfolio).to_markdown();

        assert!(md.starts_with("# Jane Doe\n\n"));
        assert!(md.contains("## Professional Experience"));
        assert!(!md.contains("Key Projects"));
        assert!(md.contains("Present"));
        assert!(md.contains("### 1. Backend at Acme\n\n**Duration**: 2021-03-01 - Present\n**Type**: Full_Time\n\n"));
    }

    #[test]
    fn test_markdown_omits_empty_sections() {
        let portfolio = empty_portfolio();

        let md = PortfolioConverter::new(&portfolio).to_markdown();

        assert_eq!(
            md,
            "# Jane Doe\n\n**Backend engineer**\n\n📧 jane@example.com | 📱 +1 555 0100 | 📍 Berlin\n\n"
        );
    }

    #[test]
    fn test_markdown_full_sections() {
        let portfolio = full_portfolio();

        let md = PortfolioConverter::new(&portfolio).to_markdown();

        assert!(md.contains("- **GitHub**: [https://github.com/jane](https://github.com/jane)\n"));
        assert!(md.contains("**Duration**: 2021-03-01 - 2020-12-31\n"));
        assert!(md.contains("🔗 **Project Link**: [https://cms.example](https://cms.example)\n\n"));
        assert!(md.contains("**Key Features:**\n- **Export**: Downloads\n  - *Technologies*: React, Rust\n\n---\n\n"));
        assert!(md.contains("## Technical Skills\n\n### Backend\n- APIs\n\n### Other\n- Writing\n\n"));
        assert!(md.contains("## Tools & Technologies\n\n- git\n\n"));
        assert!(md.contains("## Tech Stack Details\n\n### Frontend\n- **React** (Advanced)\n\n### Backend\n- **Rust** (Advanced)\n\n"));
        assert!(md.ends_with("## Blog Posts & Articles\n\n- [On Rust](https://blog.example/rust)\n  - Ownership notes\n\n"));

        let order = [
            "## Contact & Social Links",
            "## Professional Experience",
            "## Key Projects",
            "## Technical Skills",
            "## Tools & Technologies",
            "## Tech Stack Details",
            "## Blog Posts & Articles",
        ];
        let positions: Vec<usize> = order.iter().map(|h| md.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_csv_profile_only() {
        let portfolio = empty_portfolio();

        let csv = PortfolioConverter::new(&portfolio).to_csv();

        assert_eq!(
            csv,
            "Section,Field,Value\n\
             Profile,Full Name,\"Jane Doe\"\n\
             Profile,Email,\"jane@example.com\"\n\
             Profile,Phone,\"+1 555 0100\"\n\
             Profile,Address,\"Berlin\"\n\
             Profile,Description,\"Backend engineer\"\n\n"
        );
    }

    #[test]
    fn test_csv_doubles_quotes() {
        let portfolio = full_portfolio();

        let csv = PortfolioConverter::new(&portfolio).to_csv();

        assert!(csv.contains("Project,\"CMS\",\"Headless \"\"content\"\" service\",\"https://cms.example\"\n"));
    }

    #[test]
    fn test_csv_sections_and_present() {
        let portfolio = full_portfolio();

        let csv = PortfolioConverter::new(&portfolio).to_csv();

        assert!(csv.contains("Section,Company,Role,Job Type,Start Date,End Date,Description\n"));
        assert!(csv.contains(
            "Experience,\"Acme\",\"Backend\",\"Full_Time\",\"2021-03-01\",\"Present\",\"Rockets and anvils\"\n"
        ));
        assert!(csv.contains("\"2020-12-31\""));
        assert!(csv.contains("Section,Skill\nSkill,\"APIs\"\nSkill,\"Writing\"\n\n"));
        assert!(csv.contains("Section,Tool\nTool,\"git\"\n\n"));
        assert!(csv.contains("Tech Stack,\"React\",\"Frontend\",\"Advanced\"\n"));
        assert!(csv.ends_with(
            "Section,Title,Link,Description\nBlog,\"On Rust\",\"https://blog.example/rust\",\"Ownership notes\"\n"
        ));
    }

    #[test]
    fn test_summary_format() {
        let portfolio = full_portfolio();

        let summary = PortfolioConverter::new(&portfolio).to_summary();

        let expected_head = format!(
            "Portfolio Summary for Jane Doe\n{}\n\n📧 jane@example.com\n📍 Berlin\n\nProfessional Summary:\nBackend engineer\n\n📊 Statistics:\n",
            "=".repeat(37)
        );
        assert!(summary.starts_with(&expected_head));
        assert!(summary.contains("- Experience: 2 positions\n"));
        assert!(summary.contains("- Projects: 1 projects\n"));
        assert!(summary.contains("- Skills: 2 skills\n"));
        assert!(summary.contains("- Tools: 1 tools\n"));
        assert!(summary.contains("- Tech Stacks: 2 technologies\n"));
        assert!(summary.contains("- Blog Posts: 1 articles\n"));
        assert!(summary.contains("- Backend at Acme (2021-03-01 - Present)\n"));
        assert!(summary.contains("- Backend at Acme (2021-03-01 - 2020-12-31)\n"));
    }

    #[test]
    fn test_summary_without_experience_has_no_timeline() {
        let portfolio = empty_portfolio();

        let summary = PortfolioConverter::new(&portfolio).to_summary();

        assert!(summary.ends_with("- Blog Posts: 0 articles\n"));
        assert!(!summary.contains("Experience Timeline"));
    }

    #[test]
    fn test_export_default_filenames_and_mime() {
        let mut portfolio = empty_portfolio();
        portfolio.profile = profile("Jane  Q.\tDoe");
        let converter = PortfolioConverter::new(&portfolio);

        let md = converter.export(ExportFormat::Markdown, None).unwrap();
        assert_eq!(md.filename, "Jane_Q._Doe_portfolio.md");
        assert_eq!(md.mime_type, "text/markdown");

        let summary = converter.export(ExportFormat::Summary, Some("  ")).unwrap();
        assert_eq!(summary.filename, "Jane_Q._Doe_summary.txt");
        assert_eq!(summary.mime_type, "text/plain");

        let csv = converter.export(ExportFormat::Csv, Some("cv.csv")).unwrap();
        assert_eq!(csv.filename, "cv.csv");
        assert_eq!(csv.mime_type, "text/csv");

        let json = converter.export(ExportFormat::Json, None).unwrap();
        assert_eq!(json.mime_type, "application/json");
        assert!(json.filename.ends_with("_portfolio.json"));
    }

    #[test]
    fn test_unsupported_format() {
        assert_eq!(
            "pdf".parse::<ExportFormat>(),
            Err(ConvertError::UnsupportedFormat("pdf".to_string()))
        );
        assert_eq!("markdown".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
    }
}
