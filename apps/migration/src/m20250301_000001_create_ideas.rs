//! Migration to create the ideas table.
//!
//! One row per planned piece of content; `scheduled_at` is indexed because
//! both the ordered full fetch and the day-range query sort on it.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ideas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ideas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ideas::Title).string().not_null())
                    .col(ColumnDef::new(Ideas::Description).text())
                    .col(ColumnDef::new(Ideas::ScheduledAt).date_time().not_null())
                    .col(ColumnDef::new(Ideas::Platform).text().not_null())
                    .col(ColumnDef::new(Ideas::ContentType).text().not_null())
                    .col(
                        ColumnDef::new(Ideas::Status)
                            .text()
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(Ideas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ideas_scheduled_at")
                    .table(Ideas::Table)
                    .col(Ideas::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ideas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ideas {
    Table,
    Id,
    Title,
    Description,
    ScheduledAt,
    Platform,
    ContentType,
    Status,
    CreatedAt,
}
