//! Entity layer for the traceability schema.
//! - sea-orm entities for batch, transformation and logistics records.
//! - Thin query/insert helpers used by the service-layer stores.
//! - Connection bootstrap driven by `configs::DatabaseConfig`.

pub mod errors;
pub mod db;
pub mod batch;
pub mod transformation;
pub mod logistics;
