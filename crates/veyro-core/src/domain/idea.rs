use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social platform an idea is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Instagram,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    YouTube,
    TikTok,
    Facebook,
}

impl Platform {
    /// All platforms, in the order the add-idea form lists them.
    pub const ALL: [Platform; 6] = [
        Platform::LinkedIn,
        Platform::Instagram,
        Platform::TwitterX,
        Platform::YouTube,
        Platform::TikTok,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::TwitterX => "Twitter/X",
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LinkedIn" => Ok(Platform::LinkedIn),
            "Instagram" => Ok(Platform::Instagram),
            "Twitter/X" => Ok(Platform::TwitterX),
            "YouTube" => Ok(Platform::YouTube),
            "TikTok" => Ok(Platform::TikTok),
            "Facebook" => Ok(Platform::Facebook),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Format of a planned piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Post,
    Story,
    Reel,
    Video,
    Carousel,
    Live,
}

impl ContentType {
    /// All content types, in the order the add-idea form lists them.
    pub const ALL: [ContentType; 6] = [
        ContentType::Post,
        ContentType::Story,
        ContentType::Reel,
        ContentType::Video,
        ContentType::Carousel,
        ContentType::Live,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "Post",
            ContentType::Story => "Story",
            ContentType::Reel => "Reel",
            ContentType::Video => "Video",
            ContentType::Carousel => "Carousel",
            ContentType::Live => "Live",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Post" => Ok(ContentType::Post),
            "Story" => Ok(ContentType::Story),
            "Reel" => Ok(ContentType::Reel),
            "Video" => Ok(ContentType::Video),
            "Carousel" => Ok(ContentType::Carousel),
            "Live" => Ok(ContentType::Live),
            other => Err(format!("unknown content type: {other}")),
        }
    }
}

/// Lifecycle tag on a stored idea.
///
/// Every idea is created as `Scheduled`; no further transitions are defined
/// yet, so the variant list is intentionally short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Scheduled,
}

impl IdeaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ContentIdea entity - a single planned piece of content with a scheduled
/// publish date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Wall-clock date and time that places the idea on the calendar.
    pub scheduled_at: NaiveDateTime,
    pub platform: Platform,
    pub content_type: ContentType,
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
}

impl ContentIdea {
    /// Materialize a new record from store input: assigns the id, stamps
    /// `created_at`, and tags the idea as scheduled. Called by the store
    /// backends so both agree on what creation means.
    pub fn create(new: NewIdea) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            scheduled_at: new.scheduled_at,
            platform: new.platform,
            content_type: new.content_type,
            status: IdeaStatus::Scheduled,
            created_at: Utc::now(),
        }
    }
}

/// Input to the store's `add`: a ContentIdea before the store has assigned
/// `id`, `created_at`, and `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdea {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub platform: Platform,
    pub content_type: ContentType,
}

/// An in-progress add/edit form. The time-of-day is kept as the raw
/// "HH:MM" text the user typed; the service composes it with the selected
/// calendar date when the draft is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub time: String,
    pub platform: Platform,
    pub content_type: ContentType,
}

impl Default for IdeaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            time: "09:00".to_string(),
            platform: Platform::LinkedIn,
            content_type: ContentType::Post,
        }
    }
}

/// Partial update of a stored idea. Only mutable fields are listed;
/// `id` and `created_at` cannot be expressed here at all.
///
/// `description` is doubly optional: the outer `Option` is "should this
/// field change", the inner one is the new value (or `None` to clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub scheduled_at: Option<NaiveDateTime>,
    pub platform: Option<Platform>,
    pub content_type: Option<ContentType>,
    pub status: Option<IdeaStatus>,
}

impl IdeaPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.scheduled_at.is_none()
            && self.platform.is_none()
            && self.content_type.is_none()
            && self.status.is_none()
    }

    /// Merge this patch into an existing record.
    pub fn apply(&self, idea: &mut ContentIdea) {
        if let Some(title) = &self.title {
            idea.title = title.clone();
        }
        if let Some(description) = &self.description {
            idea.description = description.clone();
        }
        if let Some(scheduled_at) = self.scheduled_at {
            idea.scheduled_at = scheduled_at;
        }
        if let Some(platform) = self.platform {
            idea.platform = platform;
        }
        if let Some(content_type) = self.content_type {
            idea.content_type = content_type;
        }
        if let Some(status) = self.status {
            idea.status = status;
        }
    }
}
