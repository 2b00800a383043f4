use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    #[error("Invalid arguments for {operation}: {reason}")]
    InvalidArguments { operation: String, reason: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProxyError {
    pub fn invalid_arguments(operation: &str, reason: impl Into<String>) -> Self {
        ProxyError::InvalidArguments {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
