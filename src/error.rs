use thiserror::Error;
use crate::models::VendorId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Vendor not found: {0}")]
    NotFound(VendorId),

    #[error("No vendor is marked for deletion")]
    NoPendingDelete,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Form-level failures. These block a mutation before the collection or the
/// persistence slot is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Hours must be in format '11 AM - 3 PM'")]
    InvalidHours,

    #[error("{0} is required")]
    MissingField(&'static str),
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
