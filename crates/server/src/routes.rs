use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::store::{BatchStore, LogisticsStore, TransformationStore};
use service::{BatchService, LogisticsService, TransformationService};

use crate::errors::ApiError;

pub mod batches;
pub mod logistics;
pub mod traceability;
pub mod transformations;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Record counters for the landing page.
#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_batches: usize,
    pub total_transformations: usize,
    pub total_logistics: usize,
}

pub async fn stats<S>(State(store): State<Arc<S>>) -> Result<Json<Stats>, ApiError>
where
    S: BatchStore + TransformationStore + LogisticsStore,
{
    let total_batches = BatchService::new(store.clone()).list().await?.len();
    let total_transformations = TransformationService::new(store.clone()).list().await?.len();
    let total_logistics = LogisticsService::new(store).list().await?.len();
    Ok(Json(Stats { total_batches, total_transformations, total_logistics }))
}

/// Build the full application router over any store implementation.
pub fn build_router<S>(store: Arc<S>, cors: CorsLayer) -> Router
where
    S: BatchStore + TransformationStore + LogisticsStore + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats::<S>))
        .route("/batches", post(batches::register::<S>).get(batches::list::<S>))
        .route("/batches/:code", get(batches::find::<S>))
        .route("/batches/:code/transformations", get(transformations::list_for_batch::<S>))
        .route("/batches/:code/logistics", get(logistics::list_for_batch::<S>))
        .route("/transformations", post(transformations::register::<S>))
        .route("/logistics", post(logistics::register::<S>))
        .route("/traceability/:code", get(traceability::trace::<S>))
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // span per request with method and path, logged at INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
