use anyhow::Result;
use async_trait::async_trait;
use carbon_portfolio_core::{Position, PositionStatus, StatusFilter};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

/// Read access to the position book.
///
/// `find_by_status` returns exactly the positions whose status matches the
/// filter, or the full set for `StatusFilter::All`. Filtering happens here,
/// upstream of the aggregator.
#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Position>>;

    async fn find_by_status(&self, filter: StatusFilter) -> Result<Vec<Position>>;
}

/// In-memory position store.
pub struct InMemoryPositionStore {
    positions: RwLock<Vec<Position>>,
}

impl InMemoryPositionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_positions(positions: Vec<Position>) -> Self {
        Self {
            positions: RwLock::new(positions),
        }
    }

    /// Creates a store pre-loaded with the demo portfolio.
    #[must_use]
    pub fn seed() -> Self {
        Self::with_positions(seed_positions())
    }

    pub async fn insert(&self, position: Position) {
        self.positions.write().await.push(position);
    }
}

impl Default for InMemoryPositionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionStore {
    async fn list(&self) -> Result<Vec<Position>> {
        Ok(self.positions.read().await.clone())
    }

    async fn find_by_status(&self, filter: StatusFilter) -> Result<Vec<Position>> {
        let positions = self.positions.read().await;
        Ok(positions
            .iter()
            .filter(|p| filter.matches(p.status))
            .cloned()
            .collect())
    }
}

/// The demo portfolio the service ships with.
#[must_use]
pub fn seed_positions() -> Vec<Position> {
    vec![
        Position {
            id: "1".to_string(),
            project_name: "Amazon Reforestation".to_string(),
            tonnes: Decimal::from(1000),
            price_per_tonne: Decimal::from(20),
            status: PositionStatus::Available,
            vintage: 2023,
        },
        Position {
            id: "2".to_string(),
            project_name: "Kenya Cookstoves".to_string(),
            tonnes: Decimal::from(500),
            price_per_tonne: Decimal::from(12),
            status: PositionStatus::Available,
            vintage: 2022,
        },
        Position {
            id: "3".to_string(),
            project_name: "Indonesia Mangrove Restoration".to_string(),
            tonnes: Decimal::from(250),
            price_per_tonne: Decimal::from(35),
            status: PositionStatus::Retired,
            vintage: 2021,
        },
        Position {
            id: "4".to_string(),
            project_name: "Texas Wind Farm".to_string(),
            tonnes: Decimal::from(750),
            price_per_tonne: Decimal::from(8),
            status: PositionStatus::Available,
            vintage: 2023,
        },
        Position {
            id: "5".to_string(),
            project_name: "Himalayan Hydro".to_string(),
            tonnes: Decimal::from(300),
            price_per_tonne: Decimal::from(15),
            status: PositionStatus::Retired,
            vintage: 2022,
        },
    ]
}
