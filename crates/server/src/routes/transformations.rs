use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::domain::NewTransformation;
use service::store::{BatchStore, TransformationStore};
use service::TransformationService;

use crate::errors::ApiError;
use crate::notice::Notice;

pub async fn register<S: BatchStore + TransformationStore + 'static>(
    State(store): State<Arc<S>>,
    Json(input): Json<NewTransformation>,
) -> Result<(StatusCode, Json<Notice<models::transformation::Model>>), ApiError> {
    let created = TransformationService::new(store).register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Notice::success("transformation registered successfully", created)),
    ))
}

pub async fn list_for_batch<S: BatchStore + TransformationStore + 'static>(
    State(store): State<Arc<S>>,
    Path(code): Path<String>,
) -> Result<Json<Notice<Vec<models::transformation::Model>>>, ApiError> {
    let found = TransformationService::new(store).list_for_batch(&code).await?;
    info!(count = found.len(), batch_code = %code, "list transformations");
    Ok(Json(Notice::success(format!("{} transformations found", found.len()), found)))
}
