pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
