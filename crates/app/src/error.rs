use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("missing setting `{0}`")]
    MissingSetting(&'static str),
    #[error("storage error: {0}")]
    Gateway(#[from] gateway::GatewayError),
    #[error("invalid record: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("expense {0} not found")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
