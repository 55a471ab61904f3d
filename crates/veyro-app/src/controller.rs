//! Calendar controller - transient view state and the sequencing of user
//! actions against the calendar service.
//!
//! Everything here is per-session: the selected date, the visible month,
//! the in-progress add form, and the single editing slot. Durable state
//! lives behind the service. Store calls are awaited one at a time; a
//! failed read is logged and degrades to an empty list, a failed write
//! surfaces to the caller with the form state intact.

use chrono::{Datelike, Months, NaiveDate};
use uuid::Uuid;

use veyro_core::domain::{ContentIdea, IdeaDraft};
use veyro_core::error::DomainError;
use veyro_core::CalendarService;
use veyro_shared::format;
use veyro_shared::views::{CalendarCell, CELL_PREVIEW};

/// The one idea currently being edited, with its in-progress draft.
/// At most one of these exists; starting an edit elsewhere replaces it
/// and the previous draft is discarded without saving.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSlot {
    pub id: Uuid,
    pub draft: IdeaDraft,
}

pub struct CalendarController {
    service: CalendarService,
    today: NaiveDate,
    selected_date: NaiveDate,
    /// First day of the month the grid shows.
    visible_month: NaiveDate,
    /// Bulk-fetched collection backing the month grid.
    ideas: Vec<ContentIdea>,
    /// Ideas scheduled on the selected date.
    day_ideas: Vec<ContentIdea>,
    add_form: Option<IdeaDraft>,
    editing: Option<EditSlot>,
}

impl CalendarController {
    pub fn new(service: CalendarService, today: NaiveDate) -> Self {
        Self {
            service,
            today,
            selected_date: today,
            visible_month: first_of_month(today),
            ideas: Vec::new(),
            day_ideas: Vec::new(),
            add_form: None,
            editing: None,
        }
    }

    /// Re-read store state. Failed reads degrade to empty lists.
    pub async fn refresh(&mut self) {
        self.ideas = match self.service.all_ideas().await {
            Ok(ideas) => ideas,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load ideas");
                Vec::new()
            }
        };
        self.reload_day().await;
    }

    async fn reload_day(&mut self) {
        self.day_ideas = match self.service.ideas_on_date(self.selected_date).await {
            Ok(ideas) => ideas,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load ideas for selected date");
                Vec::new()
            }
        };
    }

    pub async fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.reload_day().await;
    }

    /// Shift the visible month forward by one calendar month, wrapping
    /// year boundaries. The selected date stays put.
    pub fn next_month(&mut self) {
        if let Some(month) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(month) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    // Add flow

    /// Open the add form seeded with the default draft (09:00, LinkedIn
    /// post).
    pub fn open_add_form(&mut self) {
        self.add_form = Some(IdeaDraft::default());
    }

    pub fn cancel_add(&mut self) {
        self.add_form = None;
    }

    /// Submit the open add form against the selected date. On failure the
    /// form stays open with its data intact; nothing is retried.
    pub async fn submit_add(&mut self) -> Result<(), DomainError> {
        let Some(draft) = self.add_form.clone() else {
            return Ok(());
        };

        self.service.create_idea(draft, self.selected_date).await?;
        self.add_form = None;
        self.refresh().await;
        Ok(())
    }

    // Edit lifecycle: Viewing -> Editing -> Viewing

    /// Enter the editing state for `id`, seeding the draft from the
    /// stored record. Any other open editing slot is replaced and its
    /// unsaved draft discarded. Returns false when `id` is unknown.
    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        let Some(idea) = self.ideas.iter().find(|idea| idea.id == id) else {
            return false;
        };

        self.editing = Some(EditSlot {
            id,
            draft: IdeaDraft {
                title: idea.title.clone(),
                description: idea.description.clone().unwrap_or_default(),
                time: format::time_field(idea.scheduled_at),
                platform: idea.platform,
                content_type: idea.content_type,
            },
        });
        true
    }

    /// Save the open editing slot and return to viewing. The edited idea
    /// is rescheduled onto the selected date with the draft's time.
    pub async fn save_edit(&mut self) -> Result<(), DomainError> {
        let Some(slot) = self.editing.clone() else {
            return Ok(());
        };

        self.service
            .revise_idea(slot.id, slot.draft, self.selected_date)
            .await?;
        self.editing = None;
        self.refresh().await;
        Ok(())
    }

    /// Discard the open editing slot without a store call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete the idea at `id`. Idempotent; a second delete of the same
    /// id is a quiet success.
    pub async fn delete_idea(&mut self, id: Uuid) -> Result<(), DomainError> {
        self.service.delete_idea(id).await?;
        if self.editing.as_ref().is_some_and(|slot| slot.id == id) {
            self.editing = None;
        }
        self.refresh().await;
        Ok(())
    }

    // View accessors

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    pub fn month_title(&self) -> String {
        format::month_title(self.visible_month)
    }

    /// Long-form heading for the selected-day panel.
    pub fn selected_day_title(&self) -> String {
        format::long_date(self.selected_date)
    }

    pub fn ideas(&self) -> &[ContentIdea] {
        &self.ideas
    }

    pub fn day_ideas(&self) -> &[ContentIdea] {
        &self.day_ideas
    }

    pub fn add_form(&self) -> Option<&IdeaDraft> {
        self.add_form.as_ref()
    }

    pub fn add_form_mut(&mut self) -> Option<&mut IdeaDraft> {
        self.add_form.as_mut()
    }

    pub fn editing(&self) -> Option<&EditSlot> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSlot> {
        self.editing.as_mut()
    }

    /// The month grid: leading blanks up to the month's first weekday
    /// (Sunday-first), then one cell per day with capped title previews.
    pub fn month_cells(&self) -> Vec<CalendarCell> {
        let leading = self.visible_month.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![CalendarCell::blank(); leading];

        for date in self
            .visible_month
            .iter_days()
            .take_while(|date| date.month() == self.visible_month.month())
        {
            let day_ideas = CalendarService::ideas_on_calendar_cell(&self.ideas, date);
            cells.push(CalendarCell {
                date: Some(date),
                preview: day_ideas
                    .iter()
                    .take(CELL_PREVIEW)
                    .map(|idea| idea.title.clone())
                    .collect(),
                overflow: day_ideas.len().saturating_sub(CELL_PREVIEW),
                is_today: date == self.today,
                is_selected: date == self.selected_date,
            });
        }

        cells
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("the first of the month exists")
}
