mod create_portfolio;
mod delete_portfolio;
mod edit_portfolio;
mod export_portfolio;
mod get_portfolio;
mod list_portfolios;

pub use create_portfolio::{CreatePortfolioError, CreatePortfolioUseCase, CreatedPortfolio};
pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use edit_portfolio::{EditPortfolioError, EditPortfolioUseCase};
pub use export_portfolio::{ExportPortfolioError, ExportPortfolioUseCase};
pub use get_portfolio::{
    GetPortfolioError, GetPortfolioUseCase, GetPublicPortfolioUseCase, GetSitePortfolioUseCase,
};
pub use list_portfolios::{ListPortfoliosError, ListPortfoliosUseCase};
