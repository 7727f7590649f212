pub mod adapter;
pub mod application;
pub mod domain;

pub use application::portfolio_use_cases::PortfolioUseCases;
