use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::{Experience, Portfolio};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Appends at the end of the experience list.
#[utoipa::path(
    post,
    path = "/api/portfolios/{id}/experience",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    request_body = Experience,
    responses(
        (status = 201, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/portfolios/{id}/experience")]
pub async fn add_experience_handler(
    path: web::Path<Uuid>,
    req: web::Json<Experience>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.edit.add_experience(id, req.into_inner()).await {
        Ok(portfolio) => ApiResponse::created(portfolio),
        Err(e) => edit_error(e, "add_experience", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;
    use crate::tests::support::stubs::StubEditPortfolioUseCase;

    fn experience_body() -> Value {
        json!({
            "company_name": "Initech",
            "company_description": "Reports",
            "start_date": "2019-02-01",
            "end_date": "2021-01-31",
            "role": "Backend",
            "job_type": "Contract"
        })
    }

    #[actix_web::test]
    async fn test_add_experience_created() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(add_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/portfolios/{}/experience", Uuid::new_v4()))
            .set_json(experience_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(edit.calls(), vec!["add_experience"]);
    }

    #[actix_web::test]
    async fn test_add_experience_requires_end_date_key() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(add_experience_handler),
        )
        .await;

        let mut body = experience_body();
        body.as_object_mut().unwrap().remove("end_date");

        let req = test::TestRequest::post()
            .uri(&format!("/api/portfolios/{}/experience", Uuid::new_v4()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_add_experience_unknown_role_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(add_experience_handler),
        )
        .await;

        let mut body = experience_body();
        body["role"] = json!("Wizard");

        let req = test::TestRequest::post()
            .uri(&format!("/api/portfolios/{}/experience", Uuid::new_v4()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
