//! Error types and handling infrastructure for rscroll.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Apply-or-reject updates**: Configuration errors surface before any state changes
//! - **Contained steady-state failures**: Loop-time errors are logged, never propagated
//!   into the scroll ticker
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rscroll operations.
///
/// This enum covers all possible error conditions that can occur while applying
/// configuration, talking to the pointer device, and reloading the config file.
#[derive(Error, Debug)]
pub enum RscrollError {
    /// Invalid or inconsistent configuration rejected at update time
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Config file read errors (missing file, permission denied, etc.)
    #[error("Config file operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file was read but could not be parsed
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Synthetic scroll/move injection failed at the platform boundary
    #[error("Pointer device error: {message}")]
    DeviceError { message: String },

    /// The on-screen indicator was requested but no backend is available
    #[error("Indicator unavailable: {message}")]
    IndicatorUnavailable { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for rscroll operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the rscroll codebase.
pub type Result<T> = std::result::Result<T, RscrollError>;

impl RscrollError {
    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ParseError for the given config path
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a DeviceError with a descriptive message
    pub fn device(message: impl Into<String>) -> Self {
        Self::DeviceError {
            message: message.into(),
        }
    }

    /// Create an IndicatorUnavailable error with a descriptive message
    pub fn indicator(message: impl Into<String>) -> Self {
        Self::IndicatorUnavailable {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to RscrollError
impl From<std::io::Error> for RscrollError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                // The path context is lost here; call sites add it via file_error()
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let config_err = RscrollError::config("watching enabled without a path");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: watching enabled without a path"
        );

        let parse_err = RscrollError::parse(PathBuf::from("/test/config.toml"), "expected table");
        assert_eq!(
            parse_err.to_string(),
            "Config parse error in /test/config.toml: expected table"
        );

        let indicator_err = RscrollError::indicator("no backend injected");
        assert_eq!(
            indicator_err.to_string(),
            "Indicator unavailable: no backend injected"
        );
    }

    #[test]
    fn test_error_constructors() {
        let device_err = RscrollError::device("wheel injection failed");
        matches!(device_err, RscrollError::DeviceError { .. });

        let config_err = RscrollError::config("button id 0 is reserved");
        matches!(config_err, RscrollError::ConfigError { .. });

        let other_err = RscrollError::other("unknown error");
        matches!(other_err, RscrollError::Other { .. });
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let rscroll_err: RscrollError = io_err.into();

        match rscroll_err {
            RscrollError::FileError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected FileError variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        let result = returns_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }
}
