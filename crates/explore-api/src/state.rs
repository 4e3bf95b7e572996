//! Application state wiring all services together.
//!
//! AppState holds the concrete service instance used by both CLI and REST API.
//! The service is generic over the store trait, but AppState pins it to the
//! SQLite implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use explore_core::service::decision::DecisionService;
use explore_infra::config::{load_service_config, resolve_data_dir, resolve_database_url};
use explore_infra::sqlite::decision::SqliteDecisionStore;
use explore_infra::sqlite::pool::DatabasePool;
use explore_types::config::ServiceConfig;

/// Concrete type alias for the service generic pinned to the infra store.
pub type ConcreteDecisionService = DecisionService<SqliteDecisionStore>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub decision_service: Arc<ConcreteDecisionService>,
    pub config: ServiceConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_service_config(&data_dir).await;

        let db_url = resolve_database_url(&config, &data_dir);
        let db_pool = DatabasePool::new(&db_url).await?;

        let decision_service = DecisionService::new(SqliteDecisionStore::new(db_pool.clone()))
            .with_mark_seen_timeout(Duration::from_secs(config.mark_seen_timeout_secs));

        tracing::debug!(data_dir = %data_dir.display(), "application state initialized");

        Ok(Self {
            decision_service: Arc::new(decision_service),
            config,
            data_dir,
            db_pool,
        })
    }

    /// Drain outstanding background work, then close the database.
    pub async fn shutdown(&self) {
        self.decision_service.wait_for_background().await;
        self.db_pool.close().await;
    }
}
