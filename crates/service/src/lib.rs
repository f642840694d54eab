//! Business layer for the traceability workflows.
//! - Pure validators for the field-level and cross-field rules.
//! - Registration services built on one shared validated-create pipeline.
//! - Store traits decoupling the services from the persistence technology.
//! - The aggregator assembling the full chain view for a batch code.

pub mod errors;
pub mod domain;
pub mod validation;
pub mod pipeline;
pub mod store;
pub mod batch_service;
pub mod transformation_service;
pub mod logistics_service;
pub mod traceability_service;
#[cfg(test)]
pub mod test_support;

pub use batch_service::BatchService;
pub use logistics_service::LogisticsService;
pub use traceability_service::TraceabilityService;
pub use transformation_service::TransformationService;
