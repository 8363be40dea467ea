use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreedError {
    /// 連線被重置、被中止，或超過請求時限
    #[error("Upstream request timed out or was aborted")]
    TransportTimeout,

    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("Upstream returned HTTP {status} {text}")]
    HttpStatusError { status: u16, text: String },

    #[error("Malformed breeds payload: {message}")]
    MalformedPayload { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    System,
}

impl BreedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BreedError::TransportTimeout | BreedError::TransportError { .. } => {
                ErrorCategory::Network
            }
            BreedError::HttpStatusError { .. } => ErrorCategory::Upstream,
            BreedError::MalformedPayload { .. } => ErrorCategory::Data,
            BreedError::ConfigError { .. }
            | BreedError::InvalidConfigValueError { .. }
            | BreedError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BreedError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        BreedError::MalformedPayload {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BreedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_groups_transport_failures() {
        assert_eq!(BreedError::TransportTimeout.category(), ErrorCategory::Network);
        assert_eq!(
            BreedError::TransportError {
                message: "refused".to_string()
            }
            .category(),
            ErrorCategory::Network
        );
        assert_eq!(
            BreedError::malformed("not an object").category(),
            ErrorCategory::Data
        );
    }

    #[test]
    fn test_display_includes_status() {
        let err = BreedError::HttpStatusError {
            status: 503,
            text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream returned HTTP 503 Service Unavailable");
    }
}
