/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the pricing core
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// True for errors raised by input or configuration checks rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
