use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("System Protected: {0}")]
    Protected(String),

    #[error("In use: {0}")]
    InUse(String),

    #[error("File Not Found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
