use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Batch registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBatch {
    pub code: String,
    pub cultivation_location: String,
    /// Calendar date as `YYYY-MM-DD`; parsed and range-checked by the service.
    pub harvest_date: String,
    pub notes: Option<String>,
}

/// Transformation registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransformation {
    pub batch_code: String,
    pub washing_process: String,
    pub washing_date: DateTime<Utc>,
    pub packaging_process: String,
    pub packaging_date: DateTime<Utc>,
    pub quality_control: String,
    pub quality_notes: Option<String>,
}

/// Logistics registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLogistics {
    pub batch_code: String,
    /// Degrees Celsius as text; parsed and range-checked by the service.
    pub transport_temperature: String,
    pub transport_started_at: DateTime<Utc>,
    pub delivered_at: DateTime<Utc>,
    pub retailer_name: String,
    pub retailer_address: String,
    pub notes: Option<String>,
}

/// Created logistics record plus the temperature advisory, when one applies.
/// A present advisory is still a success; callers render it as a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticsReceipt {
    pub record: models::logistics::Model,
    pub advisory: Option<String>,
}

/// Full chain view for one batch, assembled on demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceabilitySummary {
    pub batch: models::batch::Model,
    pub transformations: Vec<models::transformation::Model>,
    pub logistics: Vec<models::logistics::Model>,
    pub has_transformations: bool,
    pub has_logistics: bool,
    pub is_complete: bool,
}

impl TraceabilitySummary {
    pub fn build(
        batch: models::batch::Model,
        transformations: Vec<models::transformation::Model>,
        logistics: Vec<models::logistics::Model>,
    ) -> Self {
        let has_transformations = !transformations.is_empty();
        let has_logistics = !logistics.is_empty();
        Self {
            batch,
            transformations,
            logistics,
            has_transformations,
            has_logistics,
            is_complete: has_transformations && has_logistics,
        }
    }
}
