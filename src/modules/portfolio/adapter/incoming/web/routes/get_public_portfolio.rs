use actix_web::{get, web, Responder};

use super::error_responses::read_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/portfolios/{external_id}",
    tag = "public",
    params(("external_id" = String, Path, description = "Public portfolio identifier")),
    responses(
        (status = 200, description = "Portfolio", body = inline(SuccessResponse<Portfolio>)),
        (
            status = 404,
            description = "Portfolio not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PORTFOLIO_NOT_FOUND", "message": "Portfolio not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/portfolios/{external_id}")]
pub async fn get_public_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let external_id = path.into_inner();

    match data.portfolio.get_public.execute(&external_id).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => read_error(e, &external_id),
    }
}
