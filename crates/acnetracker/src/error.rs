//! Error types for acnetracker.
//!
//! Recording and exporting entries never fails on field *values*; the errors
//! here cover the surfaces around the core: naming fields outside the closed
//! schema, delivering the CSV file, configuration, and terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for acnetracker operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Schema Errors ===
    /// A field name that is not part of the canonical schema.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The name that failed to resolve.
        name: String,
    },

    /// A section name that does not match any form section.
    #[error("unknown section '{name}'")]
    UnknownSection {
        /// The name that failed to resolve.
        name: String,
    },

    /// A checkbox edit that was neither on nor off.
    #[error("invalid checkbox state '{state}' (expected on/off)")]
    CheckboxState {
        /// The rejected state text.
        state: String,
    },

    // === Session Errors ===
    /// An interactive session line that is not a known command.
    #[error("unknown command '{input}' (try 'help')")]
    UnknownCommand {
        /// The offending line.
        input: String,
    },

    /// A session command was given the wrong arguments.
    #[error("usage: {usage}")]
    Usage {
        /// The expected invocation.
        usage: &'static str,
    },

    // === Export Errors ===
    /// Writing the exported CSV file failed.
    #[error("failed to write export to {path}: {source}")]
    ExportWrite {
        /// Destination of the export.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for acnetracker operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown field error.
    #[must_use]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an unknown command error.
    #[must_use]
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand {
            input: input.into(),
        }
    }

    /// Check if this error was caused by user input inside a session,
    /// as opposed to an environment failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownField { .. }
                | Self::UnknownSection { .. }
                | Self::CheckboxState { .. }
                | Self::UnknownCommand { .. }
                | Self::Usage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = Error::unknown_field("acneSeverity");
        assert_eq!(err.to_string(), "unknown field 'acneSeverity'");
    }

    #[test]
    fn test_unknown_command_display() {
        let err = Error::unknown_command("frobnicate");
        assert!(err.to_string().contains("frobnicate"));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn test_usage_display() {
        let err = Error::Usage {
            usage: "set <field> <value>",
        };
        assert_eq!(err.to_string(), "usage: set <field> <value>");
    }

    #[test]
    fn test_checkbox_state_display() {
        let err = Error::CheckboxState {
            state: "maybe".to_string(),
        };
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::unknown_field("x").is_input_error());
        assert!(Error::unknown_command("x").is_input_error());
        assert!(Error::Usage { usage: "quit" }.is_input_error());
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!Error::Io(io_err).is_input_error());
    }

    #[test]
    fn test_export_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::ExportWrite {
            path: PathBuf::from("/readonly/acne_tracking_data.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/acne_tracking_data.csv"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "file_name must not be empty".to_string(),
        };
        assert!(err.to_string().contains("file_name"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
