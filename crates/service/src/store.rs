//! Persistence abstraction for the three record kinds. Listing operations
//! order by the business-relevant date field, descending; callers must not
//! assume insertion order.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;

#[async_trait]
pub trait BatchStore: Send + Sync {
    /// Insert a batch, stamping id and registration time. A duplicate code
    /// surfaces as `Conflict` via the unique index.
    async fn create_batch(
        &self,
        code: &str,
        cultivation_location: &str,
        harvest_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<models::batch::Model, ServiceError>;

    async fn find_batch_by_code(&self, code: &str)
        -> Result<Option<models::batch::Model>, ServiceError>;

    async fn batch_code_exists(&self, code: &str) -> Result<bool, ServiceError>;

    /// All batches, harvest date descending.
    async fn list_batches(&self) -> Result<Vec<models::batch::Model>, ServiceError>;
}

#[async_trait]
pub trait TransformationStore: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn create_transformation(
        &self,
        batch_id: Uuid,
        washing_process: &str,
        washing_date: DateTime<Utc>,
        packaging_process: &str,
        packaging_date: DateTime<Utc>,
        quality_control: &str,
        quality_notes: Option<String>,
    ) -> Result<models::transformation::Model, ServiceError>;

    /// Transformations of one batch, packaging date descending.
    async fn transformations_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::transformation::Model>, ServiceError>;

    async fn list_transformations(&self)
        -> Result<Vec<models::transformation::Model>, ServiceError>;
}

#[async_trait]
pub trait LogisticsStore: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn create_logistics(
        &self,
        batch_id: Uuid,
        transport_temperature: Decimal,
        transport_started_at: DateTime<Utc>,
        delivered_at: DateTime<Utc>,
        retailer_name: &str,
        retailer_address: &str,
        notes: Option<String>,
    ) -> Result<models::logistics::Model, ServiceError>;

    /// Logistics records of one batch, delivery date descending.
    async fn logistics_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::logistics::Model>, ServiceError>;

    async fn list_logistics(&self) -> Result<Vec<models::logistics::Model>, ServiceError>;
}
