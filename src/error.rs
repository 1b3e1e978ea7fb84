use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(code(antova_booking::validation))]
    Validation(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(antova_booking::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(antova_booking::config))]
    Config(String),

    #[error("Notification error: {0}")]
    #[diagnostic(code(antova_booking::notification))]
    Notification(String),

    #[error(transparent)]
    #[diagnostic(code(antova_booking::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(antova_booking::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(antova_booking::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BookingResult<T> = Result<T, Error>;

/// Helper to create validation errors with a client-facing message
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

/// Helper to create environment errors
#[allow(dead_code)]
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create notification errors
#[allow(dead_code)]
pub fn notification_error(message: &str) -> Error {
    Error::Notification(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
