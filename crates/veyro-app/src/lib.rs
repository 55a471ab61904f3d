//! # Veyro App
//!
//! The application shell of the Veyro planner: configuration, state
//! wiring, the calendar controller, and the roadmap session. A front-end
//! drives these types; nothing here outlives the process beyond what the
//! idea store persists.

pub mod config;
pub mod controller;
pub mod roadmap;
pub mod state;

pub use config::AppConfig;
pub use controller::{CalendarController, EditSlot};
pub use roadmap::{RoadmapError, RoadmapSession};
pub use state::AppState;
