/// Errors only exist at the edges: configuration input and session lifecycle.
/// The engine itself has no failing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    SessionError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::SessionError(msg) => write!(f, "Session Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, AppError>;
pub type SessionResult<T> = Result<T, AppError>;
