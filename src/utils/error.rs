use std::error::Error;
use std::fmt;

/// Common result type for manualkit operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for manualkit operations
#[derive(Debug)]
pub enum ManualError {
    /// Configuration error
    Config(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for ManualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManualError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ManualError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ManualError {}

impl From<String> for ManualError {
    fn from(msg: String) -> Self {
        ManualError::Generic(msg)
    }
}

impl From<&str> for ManualError {
    fn from(msg: &str) -> Self {
        ManualError::Generic(msg.to_string())
    }
}
