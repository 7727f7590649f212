use crate::modules::portfolio::application::ports::outgoing::raw_portfolio::{
    ContactLink, RawContact, RawExperience, RawFeature, RawPortfolio, RawProfile, RawProject,
    RawSkill, RawTechStack, RawTool, TechStackLink,
};
use crate::modules::portfolio::domain::{
    Contact, Experience, JobType, Portfolio, Profile, ProgrammingRole, Project, Skill, Tool,
};

pub fn sample_profile() -> Profile {
    Profile {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone_number: "+1 555 0100".to_string(),
        address: "Berlin".to_string(),
        description: "Backend engineer".to_string(),
        profile_picture: "/me.png".to_string(),
        contacts: vec![sample_contact()],
    }
}

pub fn sample_contact() -> Contact {
    Contact {
        name: "GitHub".to_string(),
        icon: "github".to_string(),
        link: "https://github.com/jane".to_string(),
    }
}

pub fn sample_experience() -> Experience {
    Experience {
        company_name: "Acme".to_string(),
        company_description: "Rockets".to_string(),
        start_date: "2021-03-01".to_string(),
        end_date: None,
        role: ProgrammingRole::Backend,
        job_type: JobType::FullTime,
        contacts: vec![],
    }
}

pub fn sample_project() -> Project {
    Project {
        title: "CMS".to_string(),
        description: "Headless content service".to_string(),
        link: String::new(),
        features: vec![],
    }
}

/// What `adapt(&sample_raw_portfolio())` produces.
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        external_id: "jane".to_string(),
        profile: sample_profile(),
        projects: vec![sample_project()],
        experience: vec![sample_experience()],
        skills: vec![Skill {
            title: "APIs".to_string(),
            category: None,
        }],
        tools: vec![Tool {
            title: "git".to_string(),
        }],
        blogs: vec![],
        contacts: vec![],
        tech_stacks: vec![],
    }
}

pub fn sample_raw_portfolio() -> RawPortfolio {
    RawPortfolio {
        id: None,
        external_id: Some("jane".to_string()),
        profile: Some(RawProfile {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone_number: Some("+1 555 0100".to_string()),
            address: Some("Berlin".to_string()),
            description: Some("Backend engineer".to_string()),
            profile_picture: Some("/me.png".to_string()),
            contacts: Some(vec![ContactLink {
                contact: RawContact {
                    name: "GitHub".to_string(),
                    icon: "github".to_string(),
                    link: "https://github.com/jane".to_string(),
                },
            }]),
        }),
        projects: Some(vec![RawProject {
            title: "CMS".to_string(),
            description: "Headless content service".to_string(),
            link: None,
            features: None,
        }]),
        experience: Some(vec![RawExperience {
            company_name: "Acme".to_string(),
            company_description: "Rockets".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: None,
            role: "Backend".to_string(),
            job_type: "Full_Time".to_string(),
            contacts: None,
        }]),
        skills: Some(vec![RawSkill {
            title: "APIs".to_string(),
            category: None,
        }]),
        tools: Some(vec![RawTool {
            title: "git".to_string(),
        }]),
        blogs: None,
        contacts: None,
    }
}

/// A raw project whose single feature uses the given `(key, title)` stacks.
pub fn raw_project_with_stacks(title: &str, stacks: &[(&str, &str)]) -> RawProject {
    RawProject {
        title: title.to_string(),
        description: String::new(),
        link: None,
        features: Some(vec![RawFeature {
            title: "Main".to_string(),
            description: String::new(),
            tech_stacks: Some(
                stacks
                    .iter()
                    .map(|(key, title)| TechStackLink {
                        tech_stack: RawTechStack {
                            title: title.to_string(),
                            key: key.to_string(),
                            icon: String::new(),
                            level: "Advanced".to_string(),
                            priority: "main".to_string(),
                            stack_type: "Frontend".to_string(),
                        },
                    })
                    .collect(),
            ),
        }]),
    }
}
