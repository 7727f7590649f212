use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ListPortfoliosError;
use crate::modules::portfolio::application::ports::outgoing::PortfolioListItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolios",
    tag = "portfolios",
    responses(
        (status = 200, description = "All portfolios, oldest first", body = [PortfolioListItem]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolios")]
pub async fn list_portfolios_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.list.execute().await {
        Ok(items) => ApiResponse::success(items),

        Err(ListPortfoliosError::RepositoryError(e)) => {
            error!("Repository error listing portfolios: {}", e);
            ApiResponse::internal_error()
        }
    }
}
