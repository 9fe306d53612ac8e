use report_export::ExportError;
use report_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid report data: {0}")]
    Import(#[from] ModelError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("An export is already in progress")]
    ExportInFlight,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
