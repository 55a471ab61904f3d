//! In-memory store implementation - used as fallback when no database is
//! configured, and as the fast backend for service-level tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use veyro_core::domain::{ContentIdea, IdeaPatch, NewIdea};
use veyro_core::error::RepoError;
use veyro_core::ports::{IdeaRepository, SettingsRepository};

/// In-memory idea repository with the same ordering and idempotency
/// semantics as the SQLite backend. Data is lost on process restart.
pub struct InMemoryIdeaRepository {
    ideas: RwLock<Vec<ContentIdea>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self {
            ideas: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryIdeaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn add(&self, new: NewIdea) -> Result<ContentIdea, RepoError> {
        let idea = ContentIdea::create(new);
        self.ideas.write().await.push(idea.clone());
        Ok(idea)
    }

    async fn get_all(&self) -> Result<Vec<ContentIdea>, RepoError> {
        let mut all = self.ideas.read().await.clone();
        all.sort_by_key(|idea| idea.scheduled_at);
        Ok(all)
    }

    async fn get_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ContentIdea>, RepoError> {
        let mut hits: Vec<ContentIdea> = self
            .ideas
            .read()
            .await
            .iter()
            .filter(|idea| idea.scheduled_at >= start && idea.scheduled_at <= end)
            .cloned()
            .collect();
        hits.sort_by_key(|idea| idea.scheduled_at);
        Ok(hits)
    }

    async fn update(&self, id: Uuid, patch: IdeaPatch) -> Result<(), RepoError> {
        let mut ideas = self.ideas.write().await;
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or(RepoError::NotFound)?;
        patch.apply(idea);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.ideas.write().await.retain(|idea| idea.id != id);
        Ok(())
    }
}

/// In-memory settings repository.
pub struct InMemorySettingsRepository {
    settings: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn put(&self, key: &str, value: &str) -> Result<(), RepoError> {
        self.settings
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self.settings.read().await.get(key).cloned())
    }
}
