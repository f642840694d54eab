//! Create `transformation` table.
//! Washing/packaging/quality-control events; many per batch.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transformation::Table)
                    .if_not_exists()
                    .col(uuid(Transformation::Id).primary_key())
                    .col(uuid(Transformation::BatchId).not_null())
                    .col(text(Transformation::WashingProcess).not_null())
                    .col(timestamp_with_time_zone(Transformation::WashingDate).not_null())
                    .col(text(Transformation::PackagingProcess).not_null())
                    .col(timestamp_with_time_zone(Transformation::PackagingDate).not_null())
                    .col(string_len(Transformation::QualityControl, 20).not_null())
                    .col(text_null(Transformation::QualityNotes))
                    .col(timestamp_with_time_zone(Transformation::RegisteredAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transformation_batch")
                            .from(Transformation::Table, Transformation::BatchId)
                            .to(Batch::Table, Batch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Transformation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Transformation {
    Table,
    Id,
    BatchId,
    WashingProcess,
    WashingDate,
    PackagingProcess,
    PackagingDate,
    QualityControl,
    QualityNotes,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum Batch { Table, Id }
