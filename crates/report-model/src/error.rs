use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Snapshot must be a JSON object")]
    NotAnObject,

    #[error("Invalid value for field: {0}")]
    InvalidField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}
