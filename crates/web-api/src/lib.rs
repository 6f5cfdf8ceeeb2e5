pub mod handlers;
pub mod server;

pub use handlers::{HealthResponse, PositionListResponse};
pub use server::ApiServer;
