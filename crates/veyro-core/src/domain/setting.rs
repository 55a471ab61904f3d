use serde::{Deserialize, Serialize};

/// Setting key under which the user's email address is persisted.
pub const USER_EMAIL_KEY: &str = "user_email";

/// A singleton-per-key settings record. Only the user email lives here
/// today; the table is generic so more keys can be added without a schema
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}
