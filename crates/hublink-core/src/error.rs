use thiserror::Error;

/// Errors raised when converting raw values into model types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("layer must be between 0 and 3, got {0}")]
    InvalidLayer(u8),
    #[error("unknown link context: {0:?}")]
    UnknownContext(String),
    #[error("unknown anchor category: {0:?}")]
    UnknownCategory(String),
    #[error("unknown page type: {0:?}")]
    UnknownPageType(String),
}
