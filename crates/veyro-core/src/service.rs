//! Calendar service - normalizes writes before they reach the store and
//! shapes raw store data into the views the calendar needs.
//!
//! Date/time composition is centralized here so the store never reasons
//! about partial time input, and month-grid rendering reuses one bulk
//! fetch instead of issuing a range query per cell.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::domain::{ContentIdea, IdeaDraft, IdeaPatch, NewIdea};
use crate::error::{DomainError, RepoError};
use crate::ports::IdeaRepository;

/// Validates and normalizes idea records on the way into the store and
/// derives day/month views from the raw collection.
#[derive(Clone)]
pub struct CalendarService {
    ideas: Arc<dyn IdeaRepository>,
}

impl CalendarService {
    pub fn new(ideas: Arc<dyn IdeaRepository>) -> Self {
        Self { ideas }
    }

    /// Validate a draft, compose its "HH:MM" time with the selected date,
    /// and persist it. Rejects before any store call on an empty title or
    /// unparseable time.
    pub async fn create_idea(
        &self,
        draft: IdeaDraft,
        selected_date: NaiveDate,
    ) -> Result<ContentIdea, DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        let scheduled_at = compose_schedule(selected_date, &draft.time)?;

        let idea = self
            .ideas
            .add(NewIdea {
                title: draft.title,
                description: normalize_description(draft.description),
                scheduled_at,
                platform: draft.platform,
                content_type: draft.content_type,
            })
            .await?;

        tracing::debug!(id = %idea.id, scheduled_at = %idea.scheduled_at, "Idea created");
        Ok(idea)
    }

    /// Re-validate an edited draft and replace the mutable fields of the
    /// record at `id`, rescheduling it onto `selected_date`.
    pub async fn revise_idea(
        &self,
        id: Uuid,
        draft: IdeaDraft,
        selected_date: NaiveDate,
    ) -> Result<(), DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        let scheduled_at = compose_schedule(selected_date, &draft.time)?;

        let patch = IdeaPatch {
            title: Some(draft.title),
            description: Some(normalize_description(draft.description)),
            scheduled_at: Some(scheduled_at),
            platform: Some(draft.platform),
            content_type: Some(draft.content_type),
            status: None,
        };

        match self.ideas.update(id, patch).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => Err(DomainError::NotFound { id }),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the idea at `id`. Idempotent.
    pub async fn delete_idea(&self, id: Uuid) -> Result<(), DomainError> {
        self.ideas.delete(id).await.map_err(Into::into)
    }

    /// The full collection, ordered by schedule. One bulk fetch backs the
    /// whole month grid.
    pub async fn all_ideas(&self) -> Result<Vec<ContentIdea>, DomainError> {
        self.ideas.get_all().await.map_err(Into::into)
    }

    /// Ideas scheduled anywhere on `date`, via an inclusive range query
    /// over `[00:00:00.000, 23:59:59.999]`.
    pub async fn ideas_on_date(&self, date: NaiveDate) -> Result<Vec<ContentIdea>, DomainError> {
        let (start, end) = day_bounds(date);
        self.ideas
            .get_by_date_range(start, end)
            .await
            .map_err(Into::into)
    }

    /// Month-grid cell filter: the subset of an already-fetched collection
    /// whose calendar date matches `date`.
    pub fn ideas_on_calendar_cell(ideas: &[ContentIdea], date: NaiveDate) -> Vec<ContentIdea> {
        ideas
            .iter()
            .filter(|idea| idea.scheduled_at.date() == date)
            .cloned()
            .collect()
    }
}

/// Combine a calendar date with user-entered "HH:MM" text.
pub fn compose_schedule(date: NaiveDate, time: &str) -> Result<NaiveDateTime, DomainError> {
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| DomainError::Validation(format!("Invalid time of day: {time:?}")))?;
    Ok(date.and_time(time))
}

/// Inclusive range covering one calendar day.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time of day");
    (start, end)
}

fn normalize_description(description: String) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
