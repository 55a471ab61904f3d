//! ContentIdea entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use veyro_core::domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub scheduled_at: DateTime,
    pub platform: Platform,
    pub content_type: ContentType,
    pub status: IdeaStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Platform {
    #[sea_orm(string_value = "LinkedIn")]
    LinkedIn,
    #[sea_orm(string_value = "Instagram")]
    Instagram,
    #[sea_orm(string_value = "Twitter/X")]
    TwitterX,
    #[sea_orm(string_value = "YouTube")]
    YouTube,
    #[sea_orm(string_value = "TikTok")]
    TikTok,
    #[sea_orm(string_value = "Facebook")]
    Facebook,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ContentType {
    #[sea_orm(string_value = "Post")]
    Post,
    #[sea_orm(string_value = "Story")]
    Story,
    #[sea_orm(string_value = "Reel")]
    Reel,
    #[sea_orm(string_value = "Video")]
    Video,
    #[sea_orm(string_value = "Carousel")]
    Carousel,
    #[sea_orm(string_value = "Live")]
    Live,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum IdeaStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Platform> for domain::Platform {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::LinkedIn => domain::Platform::LinkedIn,
            Platform::Instagram => domain::Platform::Instagram,
            Platform::TwitterX => domain::Platform::TwitterX,
            Platform::YouTube => domain::Platform::YouTube,
            Platform::TikTok => domain::Platform::TikTok,
            Platform::Facebook => domain::Platform::Facebook,
        }
    }
}

impl From<domain::Platform> for Platform {
    fn from(platform: domain::Platform) -> Self {
        match platform {
            domain::Platform::LinkedIn => Platform::LinkedIn,
            domain::Platform::Instagram => Platform::Instagram,
            domain::Platform::TwitterX => Platform::TwitterX,
            domain::Platform::YouTube => Platform::YouTube,
            domain::Platform::TikTok => Platform::TikTok,
            domain::Platform::Facebook => Platform::Facebook,
        }
    }
}

impl From<ContentType> for domain::ContentType {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Post => domain::ContentType::Post,
            ContentType::Story => domain::ContentType::Story,
            ContentType::Reel => domain::ContentType::Reel,
            ContentType::Video => domain::ContentType::Video,
            ContentType::Carousel => domain::ContentType::Carousel,
            ContentType::Live => domain::ContentType::Live,
        }
    }
}

impl From<domain::ContentType> for ContentType {
    fn from(content_type: domain::ContentType) -> Self {
        match content_type {
            domain::ContentType::Post => ContentType::Post,
            domain::ContentType::Story => ContentType::Story,
            domain::ContentType::Reel => ContentType::Reel,
            domain::ContentType::Video => ContentType::Video,
            domain::ContentType::Carousel => ContentType::Carousel,
            domain::ContentType::Live => ContentType::Live,
        }
    }
}

impl From<IdeaStatus> for domain::IdeaStatus {
    fn from(status: IdeaStatus) -> Self {
        match status {
            IdeaStatus::Scheduled => domain::IdeaStatus::Scheduled,
        }
    }
}

impl From<domain::IdeaStatus> for IdeaStatus {
    fn from(status: domain::IdeaStatus) -> Self {
        match status {
            domain::IdeaStatus::Scheduled => IdeaStatus::Scheduled,
        }
    }
}

/// Conversion from SeaORM Model to the domain ContentIdea.
impl From<Model> for domain::ContentIdea {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            scheduled_at: model.scheduled_at,
            platform: model.platform.into(),
            content_type: model.content_type.into(),
            status: model.status.into(),
            created_at: model.created_at,
        }
    }
}

/// Conversion from the domain ContentIdea to a SeaORM ActiveModel.
impl From<domain::ContentIdea> for ActiveModel {
    fn from(idea: domain::ContentIdea) -> Self {
        Self {
            id: Set(idea.id),
            title: Set(idea.title),
            description: Set(idea.description),
            scheduled_at: Set(idea.scheduled_at),
            platform: Set(idea.platform.into()),
            content_type: Set(idea.content_type.into()),
            status: Set(idea.status.into()),
            created_at: Set(idea.created_at),
        }
    }
}
