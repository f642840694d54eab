use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::store::{BatchStore, LogisticsStore, TransformationStore};

/// In-process store for tests, doc examples and the HTTP test harness.
/// Enforces the same code uniqueness and date ordering as the SQL store.
#[derive(Default)]
pub struct MemoryStore {
    batches: Mutex<Vec<models::batch::Model>>,
    transformations: Mutex<Vec<models::transformation::Model>>,
    logistics: Mutex<Vec<models::logistics::Model>>,
}

#[async_trait]
impl BatchStore for MemoryStore {
    async fn create_batch(
        &self,
        code: &str,
        cultivation_location: &str,
        harvest_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<models::batch::Model, ServiceError> {
        let mut batches = self.batches.lock().unwrap();
        if batches.iter().any(|b| b.code == code) {
            return Err(ServiceError::Conflict(format!("batch code '{}' already exists", code)));
        }
        let created = models::batch::Model {
            id: Uuid::new_v4(),
            code: code.to_string(),
            cultivation_location: cultivation_location.to_string(),
            harvest_date,
            notes,
            registered_at: Utc::now().into(),
        };
        batches.push(created.clone());
        Ok(created)
    }

    async fn find_batch_by_code(
        &self,
        code: &str,
    ) -> Result<Option<models::batch::Model>, ServiceError> {
        let batches = self.batches.lock().unwrap();
        Ok(batches.iter().find(|b| b.code == code).cloned())
    }

    async fn batch_code_exists(&self, code: &str) -> Result<bool, ServiceError> {
        let batches = self.batches.lock().unwrap();
        Ok(batches.iter().any(|b| b.code == code))
    }

    async fn list_batches(&self) -> Result<Vec<models::batch::Model>, ServiceError> {
        let mut all = self.batches.lock().unwrap().clone();
        all.sort_by(|a, b| b.harvest_date.cmp(&a.harvest_date));
        Ok(all)
    }
}

#[async_trait]
impl TransformationStore for MemoryStore {
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
        let created = models::transformation::Model {
            id: Uuid::new_v4(),
            batch_id,
            washing_process: washing_process.to_string(),
            washing_date: washing_date.into(),
            packaging_process: packaging_process.to_string(),
            packaging_date: packaging_date.into(),
            quality_control: quality_control.to_string(),
            quality_notes,
            registered_at: Utc::now().into(),
        };
        self.transformations.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn transformations_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::transformation::Model>, ServiceError> {
        let mut found: Vec<_> = self
            .transformations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.batch_id == batch_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.packaging_date.cmp(&a.packaging_date));
        Ok(found)
    }

    async fn list_transformations(
        &self,
    ) -> Result<Vec<models::transformation::Model>, ServiceError> {
        let mut all = self.transformations.lock().unwrap().clone();
        all.sort_by(|a, b| b.packaging_date.cmp(&a.packaging_date));
        Ok(all)
    }
}

#[async_trait]
impl LogisticsStore for MemoryStore {
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
        let created = models::logistics::Model {
            id: Uuid::new_v4(),
            batch_id,
            transport_temperature,
            transport_started_at: transport_started_at.into(),
            delivered_at: delivered_at.into(),
            retailer_name: retailer_name.to_string(),
            retailer_address: retailer_address.to_string(),
            notes,
            registered_at: Utc::now().into(),
        };
        self.logistics.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn logistics_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<models::logistics::Model>, ServiceError> {
        let mut found: Vec<_> = self
            .logistics
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.batch_id == batch_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.delivered_at.cmp(&a.delivered_at));
        Ok(found)
    }

    async fn list_logistics(&self) -> Result<Vec<models::logistics::Model>, ServiceError> {
        let mut all = self.logistics.lock().unwrap().clone();
        all.sort_by(|a, b| b.delivered_at.cmp(&a.delivered_at));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    #[tokio::test]
    async fn duplicate_code_is_a_conflict() {
        let store = MemoryStore::default();
        let harvest = Local::now().date_naive() - Duration::days(1);
        store.create_batch("LOT-001", "Piura", harvest, None).await.unwrap();
        match store.create_batch("LOT-001", "Piura", harvest, None).await {
            Err(ServiceError::Conflict(m)) => assert!(m.contains("'LOT-001'")),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn listings_order_by_date_descending() {
        let store = MemoryStore::default();
        let today = Local::now().date_naive();
        for days_ago in [5i64, 1, 3] {
            let code = format!("LOT-{}", days_ago);
            store.create_batch(&code, "Piura", today - Duration::days(days_ago), None).await.unwrap();
        }
        let listed = store.list_batches().await.unwrap();
        let codes: Vec<_> = listed.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, ["LOT-1", "LOT-3", "LOT-5"]);
    }
}
