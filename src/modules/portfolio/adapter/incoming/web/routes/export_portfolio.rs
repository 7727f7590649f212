use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ExportPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// json | markdown | csv | summary
    #[serde(default = "default_format")]
    pub format: String,
    /// externalId of the portfolio; the site portfolio when omitted
    pub id: Option<String>,
    pub filename: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio/export",
    tag = "public",
    params(ExportQuery),
    responses(
        (status = 200, description = "File download (Content-Disposition: attachment)", body = String),
        (
            status = 400,
            description = "Unknown format",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "UNSUPPORTED_FORMAT", "message": "Unsupported format: xml" }
            })
        ),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/export")]
pub async fn export_portfolio_handler(
    query: web::Query<ExportQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ExportQuery {
        format,
        id,
        filename,
    } = query.into_inner();

    let result = data
        .portfolio
        .export
        .execute(id.as_deref(), &format, filename.as_deref())
        .await;

    match result {
        Ok(file) => {
            info!(filename = %file.filename, format = %format, "Portfolio exported");
            ApiResponse::attachment(&file.filename, file.mime_type, file.content)
        }

        Err(e @ ExportPortfolioError::UnsupportedFormat(_)) => {
            ApiResponse::bad_request("UNSUPPORTED_FORMAT", &e.to_string())
        }

        Err(ExportPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(ExportPortfolioError::Validation(msg)) => {
            error!("Stored portfolio failed to adapt during export: {}", msg);
            ApiResponse::internal_error()
        }

        Err(ExportPortfolioError::RepositoryError(e)) => {
            error!("Repository error exporting portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
