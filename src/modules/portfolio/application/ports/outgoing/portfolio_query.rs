// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::raw_portfolio::RawPortfolio;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Admin listing row. Carries the internal id, so it is never served on public routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioListItem {
    pub id: Uuid,
    #[serde(rename = "externalId")]
    pub external_id: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, join-wrapped payloads)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<PortfolioListItem>, PortfolioQueryError>;

    /// Admin read by internal id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RawPortfolio>, PortfolioQueryError>;

    /// Public read by external id.
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<RawPortfolio>, PortfolioQueryError>;

    /// Oldest portfolio; used by the site when no external id is configured.
    async fn find_first(&self) -> Result<Option<RawPortfolio>, PortfolioQueryError>;

    async fn external_id_exists(&self, external_id: &str) -> Result<bool, PortfolioQueryError>;
}
