use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the embedded idea store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection URL, e.g. `sqlite://veyro.db?mode=rwc` or
    /// `sqlite::memory:` for a throwaway store.
    pub url: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            // One connection keeps store operations strictly sequential;
            // the controller awaits each call before issuing the next.
            max_connections: 1,
        }
    }
}

/// Handle to the embedded store with an explicit lifecycle: `open` on
/// startup, `close` on shutdown. Repositories are constructed from the
/// handle and injected where needed - there is no global instance.
pub struct Store {
    db: DbConn,
}

impl Store {
    /// Connect to the configured database and bring the schema up to the
    /// current generation.
    pub async fn open(config: &StoreConfig) -> Result<Self, DbErr> {
        tracing::info!(url = %config.url, "Opening idea store");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false)
            .to_owned();

        let db = Database::connect(opts).await?;
        migration::Migrator::up(&db, None).await?;

        tracing::info!("Idea store ready");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DbConn {
        &self.db
    }

    pub fn idea_repository(&self) -> super::SqliteIdeaRepository {
        super::SqliteIdeaRepository::new(self.db.clone())
    }

    pub fn settings_repository(&self) -> super::SqliteSettingsRepository {
        super::SqliteSettingsRepository::new(self.db.clone())
    }

    /// Shut the connection down. Pending operations run to completion
    /// first; there is no cancellation.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing idea store");
        self.db.close().await
    }
}
