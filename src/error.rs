//! Error types for the outfit_harmony library

use thiserror::Error;

/// Result type alias for outfit_harmony operations
pub type Result<T> = std::result::Result<T, HarmonyError>;

/// Errors raised by the collaborators around the scoring core
///
/// Color conversion and scoring are total functions and never fail; every
/// variant here comes from sampling, configuration, or caller input.
#[derive(Error, Debug)]
pub enum HarmonyError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension does not map to a supported decoder
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl HarmonyError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if the user can fix this by supplying a different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HarmonyError::ImageLoadError { .. }
                | HarmonyError::UnsupportedFormat { .. }
                | HarmonyError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            HarmonyError::ImageLoadError { .. } => {
                "Could not read the garment photo. Please check the file and try again.".to_string()
            }
            HarmonyError::UnsupportedFormat { path } => {
                format!(
                    "'{}' is not a supported image type. Use one of: {}.",
                    path,
                    crate::image_loader::supported_extensions().join(", ")
                )
            }
            HarmonyError::InvalidParameter { parameter, value } => {
                format!("'{}' is not a valid value for {}.", value, parameter)
            }
            HarmonyError::ConfigError { .. } => {
                "Could not load the configuration file.".to_string()
            }
            HarmonyError::ProcessingError(_) => {
                "Color analysis failed. Please try with a different image.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_load_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = HarmonyError::image_load("Failed to open shirt.jpg", io);

        assert_eq!(err.to_string(), "Failed to load image: Failed to open shirt.jpg");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(HarmonyError::invalid_parameter("slot", 7).is_recoverable());
        assert!(HarmonyError::UnsupportedFormat { path: "a.doc".into() }.is_recoverable());
        assert!(!HarmonyError::ProcessingError("boom".into()).is_recoverable());
    }

    #[test]
    fn test_user_message_mentions_value() {
        let err = HarmonyError::invalid_parameter("hex color", "#12");
        let msg = err.user_message();
        assert!(msg.contains("#12"));
        assert!(msg.contains("hex color"));
    }

    #[test]
    fn test_unsupported_format_lists_extensions() {
        let err = HarmonyError::UnsupportedFormat { path: "notes.txt".into() };
        let msg = err.user_message();
        assert!(msg.contains("notes.txt"));
        assert!(msg.contains("jpg, jpeg, png"));
        assert!(!msg.contains("heic"));
    }
}
