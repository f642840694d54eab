use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Batch listings are served harvest-date-descending
        manager
            .create_index(
                Index::create()
                    .name("idx_batch_harvest_date")
                    .table(Batch::Table)
                    .col(Batch::HarvestDate)
                    .to_owned(),
            )
            .await?;

        // Transformation: lookups by parent batch, ordered by packaging date
        manager
            .create_index(
                Index::create()
                    .name("idx_transformation_batch")
                    .table(Transformation::Table)
                    .col(Transformation::BatchId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_transformation_packaging_date")
                    .table(Transformation::Table)
                    .col(Transformation::PackagingDate)
                    .to_owned(),
            )
            .await?;

        // Logistics: lookups by parent batch, ordered by delivery date
        manager
            .create_index(
                Index::create()
                    .name("idx_logistics_batch")
                    .table(Logistics::Table)
                    .col(Logistics::BatchId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_logistics_delivered_at")
                    .table(Logistics::Table)
                    .col(Logistics::DeliveredAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_batch_harvest_date").table(Batch::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_transformation_batch").table(Transformation::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_transformation_packaging_date")
                    .table(Transformation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_logistics_batch").table(Logistics::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_logistics_delivered_at").table(Logistics::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Batch { Table, HarvestDate }

#[derive(DeriveIden)]
enum Transformation { Table, BatchId, PackagingDate }

#[derive(DeriveIden)]
enum Logistics { Table, BatchId, DeliveredAt }
