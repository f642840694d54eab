use serde::Serialize;

/// Uniform response envelope: every endpoint answers with a success flag,
/// a severity for rendering, a human-readable message, and the payload.
/// Severity is one of `success`, `warning`, `error`.
#[derive(Debug, Serialize)]
pub struct Notice<T> {
    pub success: bool,
    pub severity: &'static str,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Notice<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self { success: true, severity: "success", message: message.into(), data: Some(data) }
    }

    /// Success that must be rendered as a warning, e.g. a temperature
    /// advisory riding along with a created record.
    pub fn warning(message: impl Into<String>, data: T) -> Self {
        Self { success: true, severity: "warning", message: message.into(), data: Some(data) }
    }
}
