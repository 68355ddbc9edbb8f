use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistanceError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("could not get response from origin {origin}: {source}")]
    ApiError {
        origin: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("distance matrix request failed ({status}): {message}")]
    UpstreamError { status: String, message: String },

    #[error("could not find a distance, is your origin correct?")]
    NoDistance,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Upstream,
    Serialization,
}

impl DistanceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ApiError { .. } | Self::UpstreamError { .. } | Self::NoDistance => {
                ErrorCategory::Upstream
            }
            Self::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    /// HTTP status surfaced to the caller. Only upstream problems are the
    /// caller's concern; everything else is a generic 500.
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Upstream => StatusCode::NOT_FOUND,
            ErrorCategory::Configuration | ErrorCategory::Serialization => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DistanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_500() {
        let err = DistanceError::ConfigError {
            message: "GOOGLE_API is empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_upstream_errors_map_to_404() {
        let err = DistanceError::UpstreamError {
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string(),
        };
        assert_eq!(err.status_code(), 404);
        assert_eq!(DistanceError::NoDistance.status_code(), 404);
    }

    #[test]
    fn test_no_distance_message() {
        assert_eq!(
            DistanceError::NoDistance.to_string(),
            "could not find a distance, is your origin correct?"
        );
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DistanceError = serde_err.into();
        assert_eq!(err.category(), ErrorCategory::Serialization);
        assert_eq!(err.status_code(), 500);
    }
}
