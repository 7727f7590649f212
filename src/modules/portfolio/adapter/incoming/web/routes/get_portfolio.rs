use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::error_responses::read_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    responses(
        (status = 200, description = "Portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolios/{id}")]
pub async fn get_portfolio_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.get.execute(id).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => read_error(e, &id.to_string()),
    }
}
