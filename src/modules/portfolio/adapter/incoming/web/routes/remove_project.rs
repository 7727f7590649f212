use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/portfolios/{id}/projects/{index}",
    tag = "portfolios",
    params(
        ("id" = Uuid, Path, description = "Internal portfolio id"),
        ("index" = usize, Path, description = "0-based position in the project list"),
    ),
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 404, description = "Portfolio or entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/portfolios/{id}/projects/{index}")]
pub async fn remove_project_handler(
    path: web::Path<(Uuid, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();

    match data.portfolio.edit.remove_project(id, index).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "remove_project", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;
    use crate::tests::support::stubs::StubEditPortfolioUseCase;

    #[actix_web::test]
    async fn test_remove_project_success() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(remove_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/portfolios/{}/projects/3", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(edit.calls(), vec!["remove_project:3"]);
    }

    #[actix_web::test]
    async fn test_remove_project_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_edit(StubEditPortfolioUseCase::error(
                EditPortfolioError::RepositoryError("db down".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(remove_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/portfolios/{}/projects/0", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
