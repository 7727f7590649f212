use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Later entries move up by one position.
#[utoipa::path(
    delete,
    path = "/api/portfolios/{id}/experience/{index}",
    tag = "portfolios",
    params(
        ("id" = Uuid, Path, description = "Internal portfolio id"),
        ("index" = usize, Path, description = "0-based position in the experience list"),
    ),
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 404, description = "Portfolio or entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/portfolios/{id}/experience/{index}")]
pub async fn remove_experience_handler(
    path: web::Path<(Uuid, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();

    match data.portfolio.edit.remove_experience(id, index).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "remove_experience", id),
    }
}
