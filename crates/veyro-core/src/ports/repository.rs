use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::{ContentIdea, IdeaPatch, NewIdea};
use crate::error::RepoError;

/// Durable store of content ideas with primary-key and range-query access.
///
/// Every mutating call persists before returning; a record change is
/// visible in full or not at all.
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Persist a new idea. The store assigns the id, stamps `created_at`,
    /// and sets the status to scheduled.
    async fn add(&self, idea: NewIdea) -> Result<ContentIdea, RepoError>;

    /// Every stored idea, ordered by `scheduled_at` ascending. An empty
    /// store yields an empty vec, never an error.
    async fn get_all(&self) -> Result<Vec<ContentIdea>, RepoError>;

    /// Ideas whose `scheduled_at` falls within `[start, end]` inclusive.
    async fn get_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ContentIdea>, RepoError>;

    /// Merge a patch into the record at `id`. Fails with
    /// [`RepoError::NotFound`] when the id does not exist.
    async fn update(&self, id: Uuid, patch: IdeaPatch) -> Result<(), RepoError>;

    /// Remove the record at `id`. Deleting a missing id is a no-op
    /// success.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Key-value settings table.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Upsert the value stored under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<(), RepoError>;

    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, RepoError>;
}
