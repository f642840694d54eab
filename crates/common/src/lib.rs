//! Shared plumbing for the traceability workspace: tracing setup and the
//! handful of response types every crate agrees on.

pub mod logging;
pub mod types;
