use lexis_types::UnknownDirection;

use crate::dictionary::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    /// Missing or empty text, texts, or other required field
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    UnknownDirection(#[from] UnknownDirection),

    #[error("unknown language: {0:?} (expected \"english\" or \"igala\")")]
    UnknownLanguage(String),

    #[error("dictionary load failed: {0}")]
    Load(#[from] LoadError),
}

impl LexisError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        LexisError::InvalidInput(msg.into())
    }

    /// Errors the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LexisError::InvalidInput(_)
                | LexisError::UnknownDirection(_)
                | LexisError::UnknownLanguage(_)
        )
    }
}

pub type LexisResult<T> = Result<T, LexisError>;
