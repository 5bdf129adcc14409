//! Error types for Period sessions.
//!
//! Store operations themselves never fail through this type: the lifecycle
//! calls report a boolean and absent keys are ordinary results. These errors
//! come from configuration loading and the typed value helpers.

use thiserror::Error;

/// Main error type for Period session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key cannot be represented as a session key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::Config("name cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: name cannot be empty"
        );
    }

    #[test]
    fn test_invalid_key_error() {
        let err = Error::InvalidKey("18446744073709551615".to_string());
        assert_eq!(err.to_string(), "Invalid key: 18446744073709551615");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<i32>>("{ not: [a, list").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error:"));
    }

    #[test]
    fn test_error_debug() {
        let err = Error::Config("test".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Config"));
    }
}
