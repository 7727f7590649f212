use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::{Portfolio, Tool};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/portfolios/{id}/tools",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    request_body = Vec<Tool>,
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/portfolios/{id}/tools")]
pub async fn replace_tools_handler(
    path: web::Path<Uuid>,
    req: web::Json<Vec<Tool>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.edit.replace_tools(id, req.into_inner()).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "replace_tools", id),
    }
}
