pub mod create_portfolio_service;
pub mod delete_portfolio_service;
pub mod edit_portfolio_service;
pub mod export_portfolio_service;
pub mod get_portfolio_service;
pub mod get_site_portfolio_service;
pub mod list_portfolios_service;

pub use create_portfolio_service::CreatePortfolioService;
pub use delete_portfolio_service::DeletePortfolioService;
pub use edit_portfolio_service::EditPortfolioService;
pub use export_portfolio_service::ExportPortfolioService;
pub use get_portfolio_service::{GetPortfolioService, GetPublicPortfolioService};
pub use get_site_portfolio_service::GetSitePortfolioService;
pub use list_portfolios_service::ListPortfoliosService;
