pub mod portfolio_adapter;
pub mod portfolio_converter;
pub mod snapshot_cache;

pub use portfolio_adapter::{adapt, AdaptError};
pub use portfolio_converter::{ConvertError, ExportFormat, ExportedFile, PortfolioConverter};
pub use snapshot_cache::SnapshotCache;
