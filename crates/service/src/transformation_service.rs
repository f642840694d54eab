use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::NewTransformation;
use crate::errors::ServiceError;
use crate::pipeline::{pure, validated_create, Check};
use crate::store::{BatchStore, TransformationStore};
use crate::validation;

/// Washing/packaging/quality-control registration for an existing batch.
pub struct TransformationService<S: BatchStore + TransformationStore> {
    store: Arc<S>,
}

impl<S: BatchStore + TransformationStore> TransformationService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Register a transformation: resolve the batch, check the quality
    /// outcome, check the calendar-date sequence, then persist.
    #[instrument(skip(self, input), fields(batch_code = %input.batch_code))]
    pub async fn register(
        &self,
        input: NewTransformation,
    ) -> Result<models::transformation::Model, ServiceError> {
        let batch = self.resolve_batch(&input.batch_code).await?;
        let NewTransformation {
            washing_process,
            washing_date,
            packaging_process,
            packaging_date,
            quality_control,
            quality_notes,
            ..
        } = input;
        let checks: Vec<Check<'_>> = vec![
            pure(validation::quality_control(&quality_control)),
            // packaging date stands in for the delivery position;
            // transformations carry no delivery date of their own
            pure(validation::date_sequence(
                batch.harvest_date,
                washing_date.date_naive(),
                packaging_date.date_naive(),
                packaging_date.date_naive(),
            )),
        ];
        let created = validated_create(checks, async {
            self.store
                .create_transformation(
                    batch.id,
                    &washing_process,
                    washing_date,
                    &packaging_process,
                    packaging_date,
                    &quality_control,
                    quality_notes,
                )
                .await
        })
        .await?;
        info!(transformation_id = %created.id, batch_id = %batch.id, "transformation_registered");
        Ok(created)
    }

    /// Transformations of one batch, most recent packaging first.
    pub async fn list_for_batch(
        &self,
        batch_code: &str,
    ) -> Result<Vec<models::transformation::Model>, ServiceError> {
        let batch = self.resolve_batch(batch_code).await?;
        self.store.transformations_for_batch(batch.id).await
    }

    /// Every transformation, any batch.
    pub async fn list(&self) -> Result<Vec<models::transformation::Model>, ServiceError> {
        self.store.list_transformations().await
    }

    async fn resolve_batch(&self, code: &str) -> Result<models::batch::Model, ServiceError> {
        self.store
            .find_batch_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("batch '{}' does not exist", code)))
    }
}
