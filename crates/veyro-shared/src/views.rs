//! View models for the month-grid calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many idea titles a calendar cell previews before collapsing the
/// rest into a "+N more" count.
pub const CELL_PREVIEW: usize = 2;

/// One cell of the month grid. Cells before the first weekday of the
/// month carry no date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: Option<NaiveDate>,
    /// Idea titles previewed in the cell, at most [`CELL_PREVIEW`].
    pub preview: Vec<String>,
    /// Ideas beyond the preview cap.
    pub overflow: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    /// A leading blank before the month's first weekday.
    pub fn blank() -> Self {
        Self {
            date: None,
            preview: Vec::new(),
            overflow: 0,
            is_today: false,
            is_selected: false,
        }
    }

    pub fn day(&self) -> Option<u32> {
        use chrono::Datelike;
        self.date.map(|date| date.day())
    }
}
