use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::error_responses::portfolio_not_found;
use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    responses(
        (status = 204, description = "Portfolio deleted"),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/portfolios/{id}")]
pub async fn delete_portfolio_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.delete.execute(id).await {
        Ok(()) => {
            info!(portfolio_id = %id, "Portfolio deleted");
            ApiResponse::no_content()
        }

        Err(DeletePortfolioError::NotFound) => portfolio_not_found(),

        Err(DeletePortfolioError::RepositoryError(e)) => {
            error!("Repository error deleting portfolio {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubDeletePortfolioUseCase;

    #[actix_web::test]
    async fn test_delete_portfolio_no_content() {
        let app_state = TestAppStateBuilder::default()
            .with_delete(StubDeletePortfolioUseCase::success())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/portfolios/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_portfolio_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_delete(StubDeletePortfolioUseCase::error(DeletePortfolioError::NotFound))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/portfolios/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PORTFOLIO_NOT_FOUND");
    }
}
