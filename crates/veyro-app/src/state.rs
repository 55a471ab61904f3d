//! Application state - the explicitly wired store, repositories, and
//! service handed to the controller.

use std::sync::Arc;

use veyro_core::CalendarService;
use veyro_core::domain::USER_EMAIL_KEY;
use veyro_core::error::RepoError;
use veyro_core::ports::{IdeaRepository, SettingsRepository};
use veyro_infra::{
    InMemoryIdeaRepository, InMemorySettingsRepository, Store, StoreConfig,
};

use crate::config::AppConfig;

/// Shared application state.
pub struct AppState {
    pub ideas: Arc<dyn IdeaRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub service: CalendarService,
    store: Option<Store>,
}

impl AppState {
    /// Build the application state with appropriate implementations:
    /// the embedded store when a database URL is configured, the
    /// in-memory fallback otherwise.
    pub async fn new(config: &AppConfig) -> Self {
        let (store, ideas, settings): (
            Option<Store>,
            Arc<dyn IdeaRepository>,
            Arc<dyn SettingsRepository>,
        ) = match &config.database_url {
            Some(url) => {
                let mut store_config = StoreConfig::new(url);
                if let Some(max) = config.database_max_connections {
                    store_config.max_connections = max;
                }

                match Store::open(&store_config).await {
                    Ok(store) => {
                        let ideas = Arc::new(store.idea_repository());
                        let settings = Arc::new(store.settings_repository());
                        (Some(store), ideas, settings)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to open idea store: {}. Using in-memory fallback.",
                            e
                        );
                        (
                            None,
                            Arc::new(InMemoryIdeaRepository::new()),
                            Arc::new(InMemorySettingsRepository::new()),
                        )
                    }
                }
            }
            None => {
                tracing::warn!(
                    "VEYRO_DATABASE_URL not set. Running without persistence (in-memory mode)."
                );
                (
                    None,
                    Arc::new(InMemoryIdeaRepository::new()),
                    Arc::new(InMemorySettingsRepository::new()),
                )
            }
        };

        let service = CalendarService::new(ideas.clone());
        tracing::info!("Application state initialized");

        Self {
            ideas,
            settings,
            service,
            store,
        }
    }

    /// Persist the user's email address.
    pub async fn save_user_email(&self, email: &str) -> Result<(), RepoError> {
        self.settings.put(USER_EMAIL_KEY, email).await
    }

    /// Read the persisted email address. A failed read degrades to
    /// "absent" after logging.
    pub async fn user_email(&self) -> Option<String> {
        match self.settings.get(USER_EMAIL_KEY).await {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read user email");
                None
            }
        }
    }

    /// Close the store. Part of the explicit lifecycle: callers open on
    /// startup via [`AppState::new`] and shut down through here.
    pub async fn shutdown(self) {
        if let Some(store) = self.store {
            if let Err(err) = store.close().await {
                tracing::error!(error = %err, "Failed to close idea store");
            }
        }
    }
}
