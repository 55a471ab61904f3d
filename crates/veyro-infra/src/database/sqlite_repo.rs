//! SQLite repository implementations.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use veyro_core::domain::{ContentIdea, IdeaPatch, NewIdea, Setting};
use veyro_core::error::RepoError;
use veyro_core::ports::{IdeaRepository, SettingsRepository};

use super::entity::idea::{self, Entity as IdeaEntity};
use super::entity::setting::{self, Entity as SettingEntity};

/// SQLite-backed idea repository.
pub struct SqliteIdeaRepository {
    db: DbConn,
}

impl SqliteIdeaRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdeaRepository for SqliteIdeaRepository {
    async fn add(&self, new: NewIdea) -> Result<ContentIdea, RepoError> {
        let idea = ContentIdea::create(new);
        let active: idea::ActiveModel = idea.clone().into();

        IdeaEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(id = %idea.id, "Idea persisted");
        Ok(idea)
    }

    async fn get_all(&self) -> Result<Vec<ContentIdea>, RepoError> {
        let result = IdeaEntity::find()
            .order_by_asc(idea::Column::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn get_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ContentIdea>, RepoError> {
        let result = IdeaEntity::find()
            .filter(idea::Column::ScheduledAt.between(start, end))
            .order_by_asc(idea::Column::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, patch: IdeaPatch) -> Result<(), RepoError> {
        let model = IdeaEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            active.scheduled_at = Set(scheduled_at);
        }
        if let Some(platform) = patch.platform {
            active.platform = Set(platform.into());
        }
        if let Some(content_type) = patch.content_type {
            active.content_type = Set(content_type.into());
        }
        if let Some(status) = patch.status {
            active.status = Set(status.into());
        }

        if active.is_changed() {
            active
                .update(&self.db)
                .await
                .map_err(|e| RepoError::Query(e.to_string()))?;
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        // rows_affected == 0 is fine: deleting a missing id is a no-op.
        IdeaEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository {
    db: DbConn,
}

impl SqliteSettingsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn put(&self, key: &str, value: &str) -> Result<(), RepoError> {
        let active: setting::ActiveModel = Setting {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into();

        SettingEntity::insert(active)
            .on_conflict(
                OnConflict::column(setting::Column::Key)
                    .update_column(setting::Column::Value)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepoError> {
        let result = SettingEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Setting::from).map(|setting| setting.value))
    }
}
