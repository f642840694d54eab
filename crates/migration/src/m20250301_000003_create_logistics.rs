//! Create `logistics` table.
//! Cold-chain transport records with the monitored temperature.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logistics::Table)
                    .if_not_exists()
                    .col(uuid(Logistics::Id).primary_key())
                    .col(uuid(Logistics::BatchId).not_null())
                    .col(decimal_len(Logistics::TransportTemperature, 5, 2).not_null())
                    .col(timestamp_with_time_zone(Logistics::TransportStartedAt).not_null())
                    .col(timestamp_with_time_zone(Logistics::DeliveredAt).not_null())
                    .col(string_len(Logistics::RetailerName, 200).not_null())
                    .col(string_len(Logistics::RetailerAddress, 300).not_null())
                    .col(text_null(Logistics::Notes))
                    .col(timestamp_with_time_zone(Logistics::RegisteredAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_logistics_batch")
                            .from(Logistics::Table, Logistics::BatchId)
                            .to(Batch::Table, Batch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Logistics::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Logistics {
    Table,
    Id,
    BatchId,
    TransportTemperature,
    TransportStartedAt,
    DeliveredAt,
    RetailerName,
    RetailerAddress,
    Notes,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum Batch { Table, Id }
