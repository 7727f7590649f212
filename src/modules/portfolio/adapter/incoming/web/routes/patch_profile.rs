use actix_web::{patch, web, Responder};
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::outgoing::ProfilePatch;
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/api/portfolios/{id}/profile",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Internal portfolio id")),
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/portfolios/{id}/profile")]
pub async fn patch_profile_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.edit.update_profile(id, req.into_inner()).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "update_profile", id),
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

    #[actix_web::test]
    async fn test_patch_profile_success() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_profile_handler))
                .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/portfolios/{}/profile", Uuid::new_v4()))
            .set_json(json!({ "description": "Staff engineer" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(edit.calls(), vec!["update_profile"]);
    }

    #[actix_web::test]
    async fn test_patch_profile_invalid_email() {
        let app_state = TestAppStateBuilder::default()
            .with_edit(StubEditPortfolioUseCase::error(EditPortfolioError::Validation(
                "Invalid email format".to_string(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_profile_handler))
                .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/portfolios/{}/profile", Uuid::new_v4()))
            .set_json(json!({ "email": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
