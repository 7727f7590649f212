// src/modules/portfolio/adapter/incoming/web/routes/error_responses.rs

use actix_web::HttpResponse;
use tracing::error;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, GetPortfolioError,
};
use crate::shared::api::ApiResponse;

pub(super) fn portfolio_not_found() -> HttpResponse {
    ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
}

/// Shared by the admin, public and site read handlers.
pub(super) fn read_error(err: GetPortfolioError, target: &str) -> HttpResponse {
    match err {
        GetPortfolioError::NotFound => portfolio_not_found(),

        // stored rows that no longer adapt are a server-side problem
        GetPortfolioError::Validation(msg) => {
            error!("Stored portfolio {} failed to adapt: {}", target, msg);
            ApiResponse::internal_error()
        }

        GetPortfolioError::RepositoryError(msg) => {
            error!("Repository error reading portfolio {}: {}", target, msg);
            ApiResponse::internal_error()
        }
    }
}

/// Shared by every mutation handler.
pub(super) fn edit_error(err: EditPortfolioError, operation: &str, id: Uuid) -> HttpResponse {
    match err {
        EditPortfolioError::PortfolioNotFound => portfolio_not_found(),

        EditPortfolioError::EntryNotFound { .. } => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", &err.to_string())
        }

        EditPortfolioError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        EditPortfolioError::RepositoryError(msg) => {
            error!("Repository error during {} on portfolio {}: {}", operation, id, msg);
            ApiResponse::internal_error()
        }
    }
}
