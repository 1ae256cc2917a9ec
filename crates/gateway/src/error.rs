use reqwest::StatusCode;

/// Failure talking to the storage backend.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-success status. `message` is the text
    /// of the error body, or the status itself when the body has none.
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("expense {0} not found")]
    NotFound(String),
    #[error("invalid gateway configuration: {0}")]
    Config(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Record(#[from] engine::EngineError),
}

impl GatewayError {
    /// Returns `true` for failures that may go away on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}
