use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhStatsError>;

#[derive(Error, Debug)]
pub enum GhStatsError {
    #[error("rate-limited by the GitHub API; try again in a few minutes")]
    RateLimited,
    #[error("cloc produced no parsable summary; install it from https://github.com/AlDanial/cloc or rerun with --count-mode plain")]
    ToolNotAvailable,
    #[error("unexpected response from the GitHub API: {0}")]
    MalformedResponse(String),
    #[error("git clone failed: {0}")]
    CloneFailed(String),
    #[error("invalid ignore pattern: {0}")]
    InvalidPattern(String),
    #[error("chart rendering error: {0}")]
    Chart(String),
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<ureq::Error> for GhStatsError {
    fn from(err: ureq::Error) -> Self {
        GhStatsError::Http(Box::new(err))
    }
}
