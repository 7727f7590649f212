use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatedPortfolio,
};
use crate::modules::portfolio::application::ports::outgoing::CreatePortfolioData;
use crate::modules::portfolio::domain::{Blog, Contact, Experience, Profile, Project, Skill, Tool};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
// Same shape as the domain JSON minus the derived `techStacks`.
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePortfolioRequest {
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
}

impl From<CreatePortfolioRequest> for CreatePortfolioData {
    fn from(req: CreatePortfolioRequest) -> Self {
        CreatePortfolioData {
            external_id: req.external_id.trim().to_string(),
            profile: req.profile,
            projects: req.projects,
            experience: req.experience,
            skills: req.skills,
            tools: req.tools,
            blogs: req.blogs,
            contacts: req.contacts,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/portfolios",
    tag = "portfolios",
    request_body = CreatePortfolioRequest,
    responses(
        (status = 201, description = "Portfolio created", body = inline(SuccessResponse<CreatedPortfolio>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Invalid email format" }
            })
        ),
        (
            status = 409,
            description = "externalId already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EXTERNAL_ID_TAKEN", "message": "External id already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    req: web::Json<CreatePortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let create_data: CreatePortfolioData = req.into_inner().into();
    let external_id = create_data.external_id.clone();

    info!(external_id = %external_id, "Create portfolio request");

    match data.portfolio.create.execute(create_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreatePortfolioError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreatePortfolioError::ExternalIdTaken) => {
            ApiResponse::conflict("EXTERNAL_ID_TAKEN", "External id already exists")
        }

        Err(CreatePortfolioError::RepositoryError(e)) => {
            error!("Repository error creating portfolio {}: {}", external_id, e);
            ApiResponse::internal_error()
        }
    }
}
