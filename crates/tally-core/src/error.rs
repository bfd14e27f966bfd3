use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Serialization error: {0}")]
    Serde(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
