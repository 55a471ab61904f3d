//! SeaORM entities backing the idea store.

pub mod idea;
pub mod setting;
