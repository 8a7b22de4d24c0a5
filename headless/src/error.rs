use game_core::ConfigError;

/// Errors that can stop a headless run
#[derive(Debug)]
pub enum HeadlessError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(ConfigError),
    Args(String),
}

impl From<std::io::Error> for HeadlessError {
    fn from(e: std::io::Error) -> Self {
        HeadlessError::Io(e)
    }
}

impl From<serde_json::Error> for HeadlessError {
    fn from(e: serde_json::Error) -> Self {
        HeadlessError::Json(e)
    }
}

impl From<ConfigError> for HeadlessError {
    fn from(e: ConfigError) -> Self {
        HeadlessError::Config(e)
    }
}

impl std::fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadlessError::Io(e) => write!(f, "IO error: {}", e),
            HeadlessError::Json(e) => write!(f, "Config parse error: {}", e),
            HeadlessError::Config(e) => write!(f, "Invalid config: {}", e),
            HeadlessError::Args(msg) => write!(f, "Bad arguments: {}", msg),
        }
    }
}

impl std::error::Error for HeadlessError {}
