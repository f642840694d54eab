use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use service::domain::TraceabilitySummary;
use service::store::{BatchStore, LogisticsStore, TransformationStore};
use service::TraceabilityService;

use crate::errors::ApiError;
use crate::notice::Notice;

pub async fn trace<S: BatchStore + TransformationStore + LogisticsStore + 'static>(
    State(store): State<Arc<S>>,
    Path(code): Path<String>,
) -> Result<Json<Notice<TraceabilitySummary>>, ApiError> {
    let summary = TraceabilityService::new(store).trace(&code).await?;
    Ok(Json(Notice::success("traceability retrieved successfully", summary)))
}
