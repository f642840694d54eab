use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, SqlErr};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::store::{BatchStore, LogisticsStore, TransformationStore};

/// SeaORM-backed store over the postgres schema.
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BatchStore for SeaOrmStore {
    async fn create_batch(
        &self,
        code: &str,
        cultivation_location: &str,
        harvest_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<models::batch::Model, ServiceError> {
        let am = models::batch::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code.to_string()),
            cultivation_location: Set(cultivation_location.to_string()),
            harvest_date: Set(harvest_date),
            notes: Set(notes),
            registered_at: Set(Utc::now().into()),
        };
        match am.insert(&self.db).await {
            Ok(created) => Ok(created),
            // The unique index on batch.code is the authoritative guard; an
            // insert raced past the service pre-check lands here.
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ServiceError::Conflict(
                    format!("batch code '{}' already exists", code),
                )),
                _ => Err(ServiceError::Db(e.to_string())),
            },
        }
    }

    async fn find_batch_by_code(
        &self,
        code: &str,
    ) -> Result<Option<models::batch::Model>, ServiceError> {
        Ok(models::batch::find_by_code(&self.db, code).await?)
    }

    async fn batch_code_exists(&self, code: &str) -> Result<bool, ServiceError> {
        Ok(models::batch::code_exists(&self.db, code).await?)
    }

    async fn list_batches(&self) -> Result<Vec<models::batch::Model>, ServiceError> {
        Ok(models::batch::list(&self.db).await?)
    }
}

#[async_trait]
impl TransformationStore for SeaOrmStore {
    async fn create_transformation(
        &self,
        batch_id: Uuid,
        washing_process: &str,
        washing_date: DateTime<Utc>,
        packaging_process: &str,
        packaging_date: DateTime<Utc>,
        quality_control: &str,
        quality_notes: Option<String>,
    ) -> Result<models::transformation::Model, ServiceError> {
        let created = models::transformation::create(
            &self.db,
            batch_id,
            washing_process,
            washing_date.into(),
            packaging_process,
            packaging_date.into(),
            quality_control,
            quality_notes,
        )
        .await?;
        Ok(created)
    }

    async fn transformations_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::transformation::Model>, ServiceError> {
        Ok(models::transformation::for_batch(&self.db, batch_id).await?)
    }

    async fn list_transformations(
        &self,
    ) -> Result<Vec<models::transformation::Model>, ServiceError> {
        Ok(models::transformation::list(&self.db).await?)
    }
}

#[async_trait]
impl LogisticsStore for SeaOrmStore {
    async fn create_logistics(
        &self,
        batch_id: Uuid,
        transport_temperature: Decimal,
        transport_started_at: DateTime<Utc>,
        delivered_at: DateTime<Utc>,
        retailer_name: &str,
        retailer_address: &str,
        notes: Option<String>,
    ) -> Result<models::logistics::Model, ServiceError> {
        let created = models::logistics::create(
            &self.db,
            batch_id,
            transport_temperature,
            transport_started_at.into(),
            delivered_at.into(),
            retailer_name,
            retailer_address,
            notes,
        )
        .await?;
        Ok(created)
    }

    async fn logistics_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::logistics::Model>, ServiceError> {
        Ok(models::logistics::for_batch(&self.db, batch_id).await?)
    }

    async fn list_logistics(&self) -> Result<Vec<models::logistics::Model>, ServiceError> {
        Ok(models::logistics::list(&self.db).await?)
    }
}
