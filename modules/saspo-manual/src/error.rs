use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManualError {
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),
}
