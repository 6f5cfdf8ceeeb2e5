use crate::handlers;
use axum::{routing::get, Router};
use carbon_portfolio_data::PositionRepository;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    repository: Arc<dyn PositionRepository>,
}

impl ApiServer {
    #[must_use]
    pub fn new(repository: Arc<dyn PositionRepository>) -> Self {
        Self { repository }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/portfolio/positions", get(handlers::list_positions))
            .route("/api/portfolio/summary", get(handlers::get_summary))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.repository.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Portfolio API listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
