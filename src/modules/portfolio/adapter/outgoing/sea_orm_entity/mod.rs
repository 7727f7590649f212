pub mod blog_tech_stacks;
pub mod blogs;
pub mod contacts;
pub mod experience_contacts;
pub mod experiences;
pub mod feature_tech_stacks;
pub mod features;
pub mod portfolio_contacts;
pub mod portfolios;
pub mod profile_contacts;
pub mod profiles;
pub mod projects;
pub mod skills;
pub mod tech_stacks;
pub mod tools;
