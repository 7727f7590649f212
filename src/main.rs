pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::incoming::web::routes as portfolio_routes;
use crate::portfolio::adapter::outgoing::{PortfolioQueryPostgres, PortfolioRepositoryPostgres};
use crate::portfolio::application::helpers::SnapshotCache;
use crate::portfolio::PortfolioUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;

use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let cache = Arc::new(SnapshotCache::new(config.portfolio_cache_ttl));
    info!(ttl_secs = cache.ttl().as_secs(), "Site portfolio cache ready");
    let portfolio = PortfolioUseCases::new(
        PortfolioQueryPostgres::new(Arc::clone(&db_arc)),
        PortfolioRepositoryPostgres::new(Arc::clone(&db_arc)),
        cache,
        config.site_portfolio_external_id.clone(),
    );

    match &config.site_portfolio_external_id {
        Some(external_id) => info!(external_id = %external_id, "Site portfolio pinned"),
        None => info!("Site portfolio falls back to the oldest portfolio"),
    }

    let state = AppState { portfolio };
    let openapi = ApiDoc::openapi();

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(portfolio_routes::get_site_portfolio_handler);
    cfg.service(portfolio_routes::export_portfolio_handler);
    cfg.service(portfolio_routes::get_public_portfolio_handler);
    // Portfolio management
    cfg.service(portfolio_routes::list_portfolios_handler);
    cfg.service(portfolio_routes::create_portfolio_handler);
    cfg.service(portfolio_routes::get_portfolio_handler);
    cfg.service(portfolio_routes::delete_portfolio_handler);
    // Portfolio edits
    cfg.service(portfolio_routes::patch_profile_handler);
    cfg.service(portfolio_routes::add_experience_handler);
    cfg.service(portfolio_routes::patch_experience_handler);
    cfg.service(portfolio_routes::remove_experience_handler);
    cfg.service(portfolio_routes::add_project_handler);
    cfg.service(portfolio_routes::patch_project_handler);
    cfg.service(portfolio_routes::remove_project_handler);
    cfg.service(portfolio_routes::replace_skills_handler);
    cfg.service(portfolio_routes::replace_tools_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
