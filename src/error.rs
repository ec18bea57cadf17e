use thiserror::Error;

/// Contract violations raised while applying a mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    /// The mutation has no meaningful effect in this direction
    #[error("cannot {operation} a {mutation} mutation")]
    UnsupportedOperation {
        operation: &'static str,
        mutation: &'static str,
    },
}

/// Errors while loading the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
