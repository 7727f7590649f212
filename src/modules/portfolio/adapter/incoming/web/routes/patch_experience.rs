use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::outgoing::{ExperiencePatch, PatchField};
use crate::modules::portfolio::domain::{Contact, JobType, Portfolio, ProgrammingRole};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
// Omitted `end_date` keeps the stored value, `null` marks the position as
// ongoing.
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchExperienceRequest {
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub start_date: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub end_date: PatchField<String>,

    pub role: Option<ProgrammingRole>,
    pub job_type: Option<JobType>,
    pub contacts: Option<Vec<Contact>>,
}

impl From<PatchExperienceRequest> for ExperiencePatch {
    fn from(req: PatchExperienceRequest) -> Self {
        ExperiencePatch {
            company_name: req.company_name,
            company_description: req.company_description,
            start_date: req.start_date,
            end_date: req.end_date,
            role: req.role,
            job_type: req.job_type,
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
    patch,
    path = "/api/portfolios/{id}/experience/{index}",
    tag = "portfolios",
    params(
        ("id" = Uuid, Path, description = "Internal portfolio id"),
        ("index" = usize, Path, description = "0-based position in the experience list"),
    ),
    request_body = PatchExperienceRequest,
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio or entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/portfolios/{id}/experience/{index}")]
pub async fn patch_experience_handler(
    path: web::Path<(Uuid, usize)>,
    req: web::Json<PatchExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();
    let patch: ExperiencePatch = req.into_inner().into();

    match data.portfolio.edit.update_experience(id, index, patch).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "update_experience", id),
    }
}
