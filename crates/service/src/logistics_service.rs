use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{LogisticsReceipt, NewLogistics};
use crate::errors::ServiceError;
use crate::pipeline::{pure, validated_create, Check};
use crate::store::{BatchStore, LogisticsStore};
use crate::validation::{self, TemperatureCheck};

/// Cold-chain transport registration for an existing batch.
pub struct LogisticsService<S: BatchStore + LogisticsStore> {
    store: Arc<S>,
}

impl<S: BatchStore + LogisticsStore> LogisticsService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Register a logistics record: resolve the batch, check the transport
    /// temperature, require delivery after the transport start, persist.
    /// An out-of-optimal temperature is still a success; its advisory rides
    /// along in the receipt and must be rendered as a warning.
    #[instrument(skip(self, input), fields(batch_code = %input.batch_code))]
    pub async fn register(&self, input: NewLogistics) -> Result<LogisticsReceipt, ServiceError> {
        let batch = self.resolve_batch(&input.batch_code).await?;
        let NewLogistics {
            transport_temperature,
            transport_started_at,
            delivered_at,
            retailer_name,
            retailer_address,
            notes,
            ..
        } = input;
        let TemperatureCheck { degrees, advisory } =
            validation::temperature(&transport_temperature)?;
        let checks: Vec<Check<'_>> =
            vec![pure(validation::delivery_after_start(transport_started_at, delivered_at))];
        let record = validated_create(checks, async {
            self.store
                .create_logistics(
                    batch.id,
                    degrees,
                    transport_started_at,
                    delivered_at,
                    &retailer_name,
                    &retailer_address,
                    notes,
                )
                .await
        })
        .await?;
        info!(
            logistics_id = %record.id,
            batch_id = %batch.id,
            advisory = advisory.is_some(),
            "logistics_registered"
        );
        Ok(LogisticsReceipt { record, advisory })
    }

    /// Logistics records of one batch, most recent delivery first.
    pub async fn list_for_batch(
        &self,
        batch_code: &str,
    ) -> Result<Vec<models::logistics::Model>, ServiceError> {
        let batch = self.resolve_batch(batch_code).await?;
        self.store.logistics_for_batch(batch.id).await
    }

    /// Every logistics record, any batch.
    pub async fn list(&self) -> Result<Vec<models::logistics::Model>, ServiceError> {
        self.store.list_logistics().await
    }

    async fn resolve_batch(&self, code: &str) -> Result<models::batch::Model, ServiceError> {
        self.store
            .find_batch_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("batch '{}' does not exist", code)))
    }
}
