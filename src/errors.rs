use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Environment variable {0} is set but empty")]
    EmptyEnv(String),
    #[error("Environment variable {0} contains invalid Unicode")]
    InvalidEnv(String),
    #[error("Failed to read feed file {path}: {source}")]
    FeedRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse feed file {path}: {source}")]
    FeedParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Server error: {0}")]
    Server(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
