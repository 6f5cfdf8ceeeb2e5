use anyhow::Result;
use carbon_portfolio_core::{compute_summary, ConfigLoader, StatusFilter};
use carbon_portfolio_data::{
    seed_positions, CsvPositionStore, InMemoryPositionStore, PositionRepository,
};
use carbon_portfolio_web_api::ApiServer;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "carbon-portfolio")]
#[command(about = "Carbon credit portfolio service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the portfolio API server
    Server {
        /// Server address, overriding the configured host and port
        #[arg(short, long)]
        addr: Option<String>,
        /// Configuration profile (loads config/Config.<profile>.toml)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Compute a portfolio summary from a CSV file
    Summary {
        /// Positions CSV file
        #[arg(short, long)]
        data: String,
        /// Status filter: all, available, or retired
        #[arg(short, long, default_value = "all")]
        status: String,
    },
    /// Write the built-in seed portfolio to a CSV file
    ExportSeed {
        /// Output CSV file path
        #[arg(short, long)]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Server { addr, profile } => run_server(addr, profile.as_deref()).await,
        Commands::Summary { data, status } => run_summary(&data, &status),
        Commands::ExportSeed { output } => export_seed(&output),
    }
}

async fn run_server(addr: Option<String>, profile: Option<&str>) -> Result<()> {
    let config = match profile {
        Some(profile) => ConfigLoader::load_with_profile(profile)?,
        None => ConfigLoader::load()?,
    };

    let store = match &config.data.csv_path {
        Some(path) => {
            let positions = CsvPositionStore::load_csv(path)?;
            tracing::info!("Loaded {} positions from {}", positions.len(), path);
            InMemoryPositionStore::with_positions(positions)
        }
        None => {
            tracing::info!("No CSV configured, serving the seed portfolio");
            InMemoryPositionStore::seed()
        }
    };

    let addr = addr.unwrap_or_else(|| format!("{}:{}", config.server.host, config.server.port));
    let repository: Arc<dyn PositionRepository> = Arc::new(store);

    ApiServer::new(repository).serve(&addr).await
}

fn run_summary(data: &str, status: &str) -> Result<()> {
    let filter: StatusFilter = status.parse()?;
    let mut positions = CsvPositionStore::load_csv(data)?;
    positions.retain(|p| filter.matches(p.status));

    let summary = compute_summary(&positions);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn export_seed(output: &str) -> Result<()> {
    let positions = seed_positions();
    CsvPositionStore::write_csv(output, &positions)?;
    tracing::info!("Wrote {} seed positions to {}", positions.len(), output);

    Ok(())
}
