pub mod config;
pub mod config_loader;
pub mod position;
pub mod summary;

pub use config::{AppConfig, DataConfig, ServerConfig};
pub use config_loader::ConfigLoader;
pub use position::{Position, PositionStatus, StatusFilter, StatusParseError};
pub use summary::{compute_summary, PortfolioSummary};
