use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::domain::NewBatch;
use service::errors::ServiceError;
use service::store::BatchStore;
use service::BatchService;

use crate::errors::ApiError;
use crate::notice::Notice;

pub async fn register<S: BatchStore + 'static>(
    State(store): State<Arc<S>>,
    Json(input): Json<NewBatch>,
) -> Result<(StatusCode, Json<Notice<models::batch::Model>>), ApiError> {
    let created = BatchService::new(store).register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Notice::success("batch registered successfully", created)),
    ))
}

pub async fn list<S: BatchStore + 'static>(
    State(store): State<Arc<S>>,
) -> Result<Json<Notice<Vec<models::batch::Model>>>, ApiError> {
    let batches = BatchService::new(store).list().await?;
    info!(count = batches.len(), "list batches");
    Ok(Json(Notice::success(format!("{} batches found", batches.len()), batches)))
}

pub async fn find<S: BatchStore + 'static>(
    State(store): State<Arc<S>>,
    Path(code): Path<String>,
) -> Result<Json<Notice<models::batch::Model>>, ApiError> {
    let batch = BatchService::new(store)
        .find_by_code(&code)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("batch '{}' not found", code)))?;
    Ok(Json(Notice::success("batch found", batch)))
}
