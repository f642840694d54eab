use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::NewBatch;
use crate::errors::ServiceError;
use crate::pipeline::{pure, validated_create, Check};
use crate::store::BatchStore;
use crate::validation;

/// Batch registration and lookup, independent of the web framework.
pub struct BatchService<S: BatchStore> {
    store: Arc<S>,
}

impl<S: BatchStore> BatchService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Register a new batch: code format, code uniqueness, harvest-date
    /// window, then persist. Stops at the first failed rule.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::BatchService;
    /// use service::domain::NewBatch;
    /// use service::store::memory::MemoryStore;
    /// let svc = BatchService::new(Arc::new(MemoryStore::default()));
    /// let harvest = (chrono::Local::now().date_naive() - chrono::Duration::days(5))
    ///     .format("%Y-%m-%d").to_string();
    /// let input = NewBatch {
    ///     code: "MANGO-2024-001".into(),
    ///     cultivation_location: "Piura".into(),
    ///     harvest_date: harvest,
    ///     notes: None,
    /// };
    /// let batch = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(batch.code, "MANGO-2024-001");
    /// ```
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn register(&self, input: NewBatch) -> Result<models::batch::Model, ServiceError> {
        let NewBatch { code, cultivation_location, harvest_date, notes } = input;
        let checks: Vec<Check<'_>> = vec![
            pure(validation::batch_code(&code)),
            Box::pin(async {
                if self.store.batch_code_exists(&code).await? {
                    debug!("batch code already taken");
                    return Err(ServiceError::Conflict(format!(
                        "batch code '{}' already exists",
                        code
                    )));
                }
                Ok(())
            }),
            pure(validation::harvest_date_str(&harvest_date).map(|_| ())),
        ];
        let created = validated_create(checks, async {
            let date = validation::harvest_date_str(&harvest_date)?;
            self.store.create_batch(&code, &cultivation_location, date, notes).await
        })
        .await?;
        info!(batch_id = %created.id, "batch_registered");
        Ok(created)
    }

    /// Fetch one batch by code.
    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<models::batch::Model>, ServiceError> {
        self.store.find_batch_by_code(code).await
    }

    /// All batches, most recent harvest first.
    pub async fn list(&self) -> Result<Vec<models::batch::Model>, ServiceError> {
        self.store.list_batches().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::{Duration, Local};

    fn recent(days_ago: i64) -> String {
        (Local::now().date_naive() - Duration::days(days_ago)).format("%Y-%m-%d").to_string()
    }

    fn input(code: &str, harvest_date: String) -> NewBatch {
        NewBatch {
            code: code.to_string(),
            cultivation_location: "Piura".to_string(),
            harvest_date,
            notes: None,
        }
    }

    #[tokio::test]
    async fn register_then_duplicate_conflicts() {
        let svc = BatchService::new(Arc::new(MemoryStore::default()));
        let batch = svc.register(input("MANGO-2024-001", recent(5))).await.unwrap();
        assert_eq!(batch.code, "MANGO-2024-001");

        match svc.register(input("MANGO-2024-001", recent(5))).await {
            Err(ServiceError::Conflict(m)) => {
                assert_eq!(m, "batch code 'MANGO-2024-001' already exists")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bad_code_fails_before_storage_is_touched() {
        let svc = BatchService::new(Arc::new(MemoryStore::default()));
        match svc.register(input("AB", recent(1))).await {
            Err(ServiceError::Validation(m)) => assert!(m.contains("at least 3")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn uniqueness_is_checked_before_the_harvest_date() {
        let svc = BatchService::new(Arc::new(MemoryStore::default()));
        svc.register(input("LOT-010", recent(2))).await.unwrap();

        // duplicate code plus an unparseable date: the conflict wins
        match svc.register(input("LOT-010", "never".to_string())).await {
            Err(ServiceError::Conflict(_)) => {}
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn stale_harvest_date_is_rejected_and_not_persisted() {
        let svc = BatchService::new(Arc::new(MemoryStore::default()));
        match svc.register(input("LOT-020", recent(400))).await {
            Err(ServiceError::Validation(m)) => assert!(m.contains("one year")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(svc.find_by_code("LOT-020").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_is_ordered_and_idempotent() {
        let svc = BatchService::new(Arc::new(MemoryStore::default()));
        for (code, days_ago) in [("LOT-A", 3i64), ("LOT-B", 1), ("LOT-C", 2)] {
            svc.register(input(code, recent(days_ago))).await.unwrap();
        }
        let first = svc.list().await.unwrap();
        let codes: Vec<_> = first.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, ["LOT-B", "LOT-C", "LOT-A"]);

        let second = svc.list().await.unwrap();
        assert_eq!(first, second);
    }
}
