//! # Veyro Infrastructure
//!
//! Concrete implementations of the ports defined in `veyro-core`.
//! This crate contains the embedded idea store and its in-memory twin.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - embedded SQLite store via SeaORM
//! - `minimal` - in-memory only, no embedded database

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryIdeaRepository, InMemorySettingsRepository};

// Re-exports - SQLite
#[cfg(feature = "sqlite")]
pub use database::{SqliteIdeaRepository, SqliteSettingsRepository, Store, StoreConfig};
