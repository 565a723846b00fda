use crate::domain::constants::{IMAGE_READ_MESSAGE, REQUIRED_FIELDS_MESSAGE};

/// Error taxonomy for user-surfaced failures.
///
/// Storage *parse* problems never appear here: the store recovers those
/// locally by substituting an empty collection. Storage *write* problems
/// must surface, since they mean data loss risk.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    Validation,
    #[error("{}", IMAGE_READ_MESSAGE)]
    ImageRead(#[source] std::io::Error),
    #[error("could not save reports: {0}")]
    StorageWrite(String),
    #[error("report not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation => "VALIDATION",
            AppError::ImageRead(_) => "IMAGE_READ",
            AppError::StorageWrite(_) => "STORAGE_WRITE",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Stable machine-readable code for the `--json` error envelope.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<AppError>()
        .map(AppError::code)
        .unwrap_or("INTERNAL")
}
