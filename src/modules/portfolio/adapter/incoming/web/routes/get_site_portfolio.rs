use actix_web::{get, web, Responder};

use super::error_responses::read_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Served from the snapshot cache.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "public",
    responses(
        (status = 200, description = "Site portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 404, description = "No portfolio stored yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_site_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_site.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => read_error(e, "site"),
    }
}
