use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown alert: {0}")]
    UnknownAlert(String),
}

pub type Result<T> = std::result::Result<T, AlertsError>;
