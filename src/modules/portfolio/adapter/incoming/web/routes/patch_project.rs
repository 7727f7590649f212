use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error_responses::edit_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::outgoing::ProjectPatch;
use crate::modules::portfolio::domain::{Feature, Portfolio};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Empty string removes the link.
    pub link: Option<String>,
    /// Replaces every feature when present.
    pub features: Option<Vec<Feature>>,
}

impl From<PatchProjectRequest> for ProjectPatch {
    fn from(req: PatchProjectRequest) -> Self {
        ProjectPatch {
            title: req.title,
            description: req.description,
            link: req.link,
            features: req.features,
        }
    }
}

#[utoipa::path(
    patch,
    path = "/api/portfolios/{id}/projects/{index}",
    tag = "portfolios",
    params(
        ("id" = Uuid, Path, description = "Internal portfolio id"),
        ("index" = usize, Path, description = "0-based position in the project list"),
    ),
    request_body = PatchProjectRequest,
    responses(
        (status = 200, description = "Updated portfolio", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Portfolio or entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/portfolios/{id}/projects/{index}")]
pub async fn patch_project_handler(
    path: web::Path<(Uuid, usize)>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();

    match data
        .portfolio
        .edit
        .update_project(id, index, req.into_inner().into())
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => edit_error(e, "update_project", id),
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
    async fn test_patch_project_success() {
        let edit = StubEditPortfolioUseCase::success(sample_portfolio());
        let app_state = TestAppStateBuilder::default()
            .with_edit(edit.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_project_handler))
                .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/portfolios/{}/projects/1", Uuid::new_v4()))
            .set_json(json!({ "title": "Ledger v2", "features": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(edit.calls(), vec!["update_project:1"]);
    }

    #[actix_web::test]
    async fn test_patch_project_entry_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_edit(StubEditPortfolioUseCase::error(
                EditPortfolioError::EntryNotFound {
                    collection: "project",
                    index: 4,
                },
            ))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_project_handler))
                .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/portfolios/{}/projects/4", Uuid::new_v4()))
            .set_json(json!({ "title": "Ledger v2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ENTRY_NOT_FOUND");
    }
}
