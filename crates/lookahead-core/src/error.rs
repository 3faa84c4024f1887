use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a [`crate::ResultProvider`] for one query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Provider failed for '{query}': {message}")]
pub struct ProviderError {
    pub query: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_error_display_json() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err = Error::Json(json_err);
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("minQueryLength must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Config error: minQueryLength must be at least 1"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::new("abc", "connection reset");
        assert_eq!(err.to_string(), "Provider failed for 'abc': connection reset");
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: Error = ProviderError::new("abc", "timeout").into();
        assert!(matches!(err, Error::Provider(_)));
        assert_eq!(err.to_string(), "Provider failed for 'abc': timeout");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
