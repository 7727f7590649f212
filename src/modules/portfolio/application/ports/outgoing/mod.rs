pub mod portfolio_query;
pub mod portfolio_repository;
pub mod raw_portfolio;

pub use portfolio_query::{PortfolioListItem, PortfolioQuery, PortfolioQueryError};
pub use portfolio_repository::{
    CreatePortfolioData, ExperiencePatch, PatchField, PortfolioRepository,
    PortfolioRepositoryError, ProfilePatch, ProjectPatch,
};
pub use raw_portfolio::RawPortfolio;
