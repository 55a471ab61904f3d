//! # Veyro Shared
//!
//! DTOs and display helpers shared between the planner engine and any
//! front-end shell.

pub mod dto;
pub mod format;
pub mod views;

pub use dto::BrandFormData;
pub use views::{CalendarCell, CELL_PREVIEW};
