//! Error types and handling for the Heyuan guide renderer

use thiserror::Error;

/// Main error type for the guide renderer
#[derive(Error, Debug)]
pub enum GuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures while retrieving the dataset
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-success HTTP status from the dataset location
    #[error("HTTP error! status: {status} ({location})")]
    Status { status: u16, location: String },

    /// Malformed dataset content
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl GuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status<S: Into<String>>(status: u16, location: S) -> Self {
        Self::Status {
            status,
            location: location.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GuideError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            GuideError::Network { .. } => {
                "Unable to reach the travel data location. Please check your connection."
                    .to_string()
            }
            GuideError::Status { status, .. } => {
                format!("The travel data location answered with HTTP {status}.")
            }
            GuideError::Parse { .. } => {
                "The travel data file is not a valid dataset.".to_string()
            }
            GuideError::Io { .. } => {
                "File operation failed. Please check paths and permissions.".to_string()
            }
            GuideError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GuideError::config("bad port");
        assert!(matches!(config_err, GuideError::Config { .. }));

        let status_err = GuideError::status(404, "http://localhost/data.json");
        assert!(matches!(status_err, GuideError::Status { status: 404, .. }));
        assert_eq!(
            status_err.to_string(),
            "HTTP error! status: 404 (http://localhost/data.json)"
        );
    }

    #[test]
    fn test_user_messages() {
        let config_err = GuideError::config("port must be non-zero");
        assert!(config_err.user_message().contains("port must be non-zero"));

        let network_err = GuideError::network("test");
        assert!(network_err.user_message().contains("Unable to reach"));

        let status_err = GuideError::status(500, "x");
        assert!(status_err.user_message().contains("500"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: GuideError = io_err.into();
        assert!(matches!(guide_err, GuideError::Io { .. }));
    }
}
