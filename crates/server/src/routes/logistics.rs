use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::domain::NewLogistics;
use service::store::{BatchStore, LogisticsStore};
use service::LogisticsService;

use crate::errors::ApiError;
use crate::notice::Notice;

pub async fn register<S: BatchStore + LogisticsStore + 'static>(
    State(store): State<Arc<S>>,
    Json(input): Json<NewLogistics>,
) -> Result<(StatusCode, Json<Notice<models::logistics::Model>>), ApiError> {
    let receipt = LogisticsService::new(store).register(input).await?;
    // an advisory is still a success, rendered as a warning notice
    let notice = match receipt.advisory {
        Some(advisory) => Notice::warning(advisory, receipt.record),
        None => Notice::success("logistics record registered successfully", receipt.record),
    };
    Ok((StatusCode::CREATED, Json(notice)))
}

pub async fn list_for_batch<S: BatchStore + LogisticsStore + 'static>(
    State(store): State<Arc<S>>,
    Path(code): Path<String>,
) -> Result<Json<Notice<Vec<models::logistics::Model>>>, ApiError> {
    let found = LogisticsService::new(store).list_for_batch(&code).await?;
    info!(count = found.len(), batch_code = %code, "list logistics");
    Ok(Json(Notice::success(format!("{} logistics records found", found.len()), found)))
}
