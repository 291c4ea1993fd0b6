#[derive(Debug, thiserror::Error)]
pub enum SneakPeakError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Login required: {0}")]
    LoginRequired(String),

    #[error("Session is still loading")]
    SessionLoading,
}

pub type Result<T> = std::result::Result<T, SneakPeakError>;
