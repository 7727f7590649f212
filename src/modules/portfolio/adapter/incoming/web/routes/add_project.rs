use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::{Portfolio, Project};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/portfolios/{id}/projects",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    request_body = Project,
    responses(
        (status = 201, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/portfolios/{id}/projects")]
pub async fn add_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<Project>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.edit.add_project(id, req.into_inner()).await {
        Ok(portfolio) => ApiResponse::created(portfolio),
        Err(e) => edit_error(e, "add_project", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;
    use crate::tests::support::stubs::StubEditPortfolioUseCase;

    fn project_body() -> Value {
        json!({
            "title": "Ledger",
            "description": "Double-entry bookkeeping",
            "features": [{
                "title": "API",
                "description": "REST surface",
                "techStacks": [{
                    "title": "Rust",
                    "key": "rust",
                    "icon": "",
                    "level": "Expert",
                    "priority": "main",
                    "type": "Backend"
                }]
            }]
        })
    }

    #[actix_web::test]
    async fn test_add_project_created() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(add_project_handler))
                .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/portfolios/{}/projects", Uuid::new_v4()))
            .set_json(project_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(edit.calls(), vec!["add_project"]);
    }

    #[actix_web::test]
    async fn test_add_project_blank_title() {
        let app_state = TestAppStateBuilder::default()
            .with_edit(StubEditPortfolioUseCase::error(EditPortfolioError::Validation(
                "title cannot be empty".to_string(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(add_project_handler))
                .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/portfolios/{}/projects", Uuid::new_v4()))
            .set_json(project_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "title cannot be empty");
    }
}
