use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::portfolio::adapter::incoming::web::routes::{
    CreatePortfolioRequest, PatchExperienceRequest, PatchProjectRequest,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::CreatedPortfolio;
use crate::modules::portfolio::application::ports::outgoing::{PortfolioListItem, ProfilePatch};
use crate::modules::portfolio::domain::{
    Blog, Contact, Experience, Feature, JobType, Portfolio, Priority, Profile, ProgrammingLevel,
    ProgrammingRole, Project, ProjectType, Skill, TechStack, Tool,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Portfolio content store with public rendering and export",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_site_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::export_portfolio_handler,

        // Portfolio management
        crate::modules::portfolio::adapter::incoming::web::routes::list_portfolios_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_handler,

        // Portfolio edits
        crate::modules::portfolio::adapter::incoming::web::routes::patch_profile_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::patch_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::patch_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::replace_skills_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::replace_tools_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<Portfolio>,
            ErrorResponse,
            ErrorDetail,

            // Domain
            Portfolio,
            Profile,
            Contact,
            Experience,
            Project,
            Feature,
            TechStack,
            Blog,
            Skill,
            Tool,
            ProgrammingRole,
            ProgrammingLevel,
            JobType,
            Priority,
            ProjectType,

            // Request / response DTOs
            PortfolioListItem,
            CreatePortfolioRequest,
            CreatedPortfolio,
            ProfilePatch,
            PatchExperienceRequest,
            PatchProjectRequest
        )
    ),
    tags(
        (name = "public", description = "Read-only portfolio rendering and export"),
        (name = "portfolios", description = "Portfolio management endpoints"),
    )
)]
pub struct ApiDoc;
