mod add_experience;
mod add_project;
mod create_portfolio;
mod delete_portfolio;
mod error_responses;
mod export_portfolio;
mod get_portfolio;
mod get_public_portfolio;
mod get_site_portfolio;
mod list_portfolios;
mod patch_experience;
mod patch_profile;
mod patch_project;
mod remove_experience;
mod remove_project;
mod replace_skills;
mod replace_tools;

pub use add_experience::*;
pub use add_project::*;
pub use create_portfolio::*;
pub use delete_portfolio::*;
pub use export_portfolio::*;
pub use get_portfolio::*;
pub use get_public_portfolio::*;
pub use get_site_portfolio::*;
pub use list_portfolios::*;
pub use patch_experience::*;
pub use patch_profile::*;
pub use patch_project::*;
pub use remove_experience::*;
pub use remove_project::*;
pub use replace_skills::*;
pub use replace_tools::*;
