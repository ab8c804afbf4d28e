//! Application state

use common::Config;
use engine::{DashboardService, ProgressionService, RankingService};
use sqlx::PgPool;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub progression: ProgressionService,
    pub dashboards: DashboardService,
    pub rankings: RankingService,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        Self {
            config,
            progression: ProgressionService::new(pool.clone()),
            dashboards: DashboardService::new(pool.clone()),
            rankings: RankingService::new(pool.clone()),
            pool,
        }
    }
}
