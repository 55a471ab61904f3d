//! Display formatting for calendar dates and times.

use chrono::{NaiveDate, NaiveDateTime};

/// 12-hour clock with AM/PM, e.g. "09:00 AM".
pub fn time_12h(at: NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}

/// Long-form date for the selected-day panel, e.g.
/// "Friday, March 15, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Month header for the grid, e.g. "March 2024".
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// The "HH:MM" form-field value for a stored schedule, the inverse of
/// what the add/edit form collects.
pub fn time_field(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}
