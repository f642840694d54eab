use std::sync::Arc;

use tracing::instrument;

use crate::domain::TraceabilitySummary;
use crate::errors::ServiceError;
use crate::store::{BatchStore, LogisticsStore, TransformationStore};

/// Assembles the full origin-to-delivery view for a batch code.
pub struct TraceabilityService<S: BatchStore + TransformationStore + LogisticsStore> {
    store: Arc<S>,
}

impl<S: BatchStore + TransformationStore + LogisticsStore> TraceabilityService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Resolve the batch, then gather its transformations and logistics.
    /// Empty collections are valid; the only failure is an unknown code.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{BatchService, TraceabilityService};
    /// use service::domain::NewBatch;
    /// use service::store::memory::MemoryStore;
    /// let store = Arc::new(MemoryStore::default());
    /// let harvest = (chrono::Local::now().date_naive() - chrono::Duration::days(3))
    ///     .format("%Y-%m-%d").to_string();
    /// let input = NewBatch {
    ///     code: "LOT-77".into(),
    ///     cultivation_location: "Ica".into(),
    ///     harvest_date: harvest,
    ///     notes: None,
    /// };
    /// tokio_test::block_on(BatchService::new(store.clone()).register(input)).unwrap();
    /// let summary = tokio_test::block_on(TraceabilityService::new(store).trace("LOT-77")).unwrap();
    /// assert_eq!(summary.batch.code, "LOT-77");
    /// assert!(!summary.is_complete);
    /// ```
    #[instrument(skip(self))]
    pub async fn trace(&self, batch_code: &str) -> Result<TraceabilitySummary, ServiceError> {
        let batch = self
            .store
            .find_batch_by_code(batch_code)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("batch '{}' does not exist", batch_code))
            })?;
        let transformations = self.store.transformations_for_batch(batch.id).await?;
        let logistics = self.store.logistics_for_batch(batch.id).await?;
        Ok(TraceabilitySummary::build(batch, transformations, logistics))
    }
}
