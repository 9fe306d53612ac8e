use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No pages to export")]
    NoPages,

    #[error("Failed to capture page {page}: {reason}")]
    Rasterization { page: usize, reason: String },

    #[error("Failed to decode page image: {0}")]
    ImageDecode(String),

    #[error("PDF assembly failed: {0}")]
    Assembly(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failure reported by a rasterizer for a single page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RasterError(pub String);

impl RasterError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl From<report_model::ModelError> for ExportError {
    fn from(err: report_model::ModelError) -> Self {
        ExportError::Serialization(err.to_string())
    }
}
