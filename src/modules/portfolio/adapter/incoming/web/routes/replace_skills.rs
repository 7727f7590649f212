use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::{Portfolio, Skill};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/portfolios/{id}/skills",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    request_body = Vec<Skill>,
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/portfolios/{id}/skills")]
pub async fn replace_skills_handler(
    path: web::Path<Uuid>,
    req: web::Json<Vec<Skill>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.edit.replace_skills(id, req.into_inner()).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "replace_skills", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;
    use crate::tests::support::stubs::StubEditPortfolioUseCase;

    #[actix_web::test]
    async fn test_replace_skills_success() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(replace_skills_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/portfolios/{}/skills", Uuid::new_v4()))
            .set_json(json!([
                { "title": "Rust", "type": "Languages" },
                { "title": "Distributed systems" }
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(edit.calls(), vec!["replace_skills"]);
    }
}
