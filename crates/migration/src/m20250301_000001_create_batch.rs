//! Create `batch` table.
//!
//! Origin record of a harvest; the unique index on `code` is the
//! authoritative guard against duplicate registration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batch::Table)
                    .if_not_exists()
                    .col(uuid(Batch::Id).primary_key())
                    .col(string_len(Batch::Code, 50).unique_key().not_null())
                    .col(string_len(Batch::CultivationLocation, 200).not_null())
                    .col(date(Batch::HarvestDate).not_null())
                    .col(text_null(Batch::Notes))
                    .col(timestamp_with_time_zone(Batch::RegisteredAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Batch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Batch {
    Table,
    Id,
    Code,
    CultivationLocation,
    HarvestDate,
    Notes,
    RegisteredAt,
}
