//! Error types for report decoding.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context for debugging.
//!
//! ## Error Categories
//!
//! - **File Errors**: problems reading a report file from disk
//! - **Truncated Errors**: a report file shorter than its record layout
//! - **Parse Errors**: schema construction or record decoding failures
//! - **Bounds Errors**: a field or event index outside the record
//! - **Type Conversion Errors**: a field read with the wrong type
//!
//! ## Helper Constructors
//!
//! Use helper methods for common error scenarios:
//!
//! ```rust
//! use spyhop::ReportError;
//! use std::path::PathBuf;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
//! let file_error = ReportError::file_error(PathBuf::from("/deploy/run42.bin"), io_err);
//!
//! let parse_error = ReportError::parse_error("Schema validation", "duplicate field name");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report decoding operations.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;

/// Main error type for report decoding operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error("Report file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report file too short: {actual} bytes, record layout needs {expected}")]
    Truncated { expected: usize, actual: usize },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Field '{field}' not found in record schema")]
    FieldNotFound { field: String },

    #[error("Type conversion error: {details}")]
    TypeConversion { details: String },

    #[error("Record access out of bounds at offset {offset:#x}")]
    Bounds { offset: usize },
}

impl ReportError {
    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ReportError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        ReportError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for bounds errors.
    pub fn bounds_error(offset: usize) -> Self {
        ReportError::Bounds { offset }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_messages_format_correctly_with_arbitrary_context(
                field_name in "\\w+",
                offset in 0usize..0x10000usize,
                details in ".*",
                expected in 1usize..0x100000usize,
                actual in 0usize..0x100000usize
            ) {
                // Property: error messages contain their structured context
                let field_error = ReportError::FieldNotFound { field: field_name.clone() };
                let bounds_error = ReportError::Bounds { offset };
                let conversion_error = ReportError::TypeConversion { details: details.clone() };
                let truncated_error = ReportError::Truncated { expected, actual };

                prop_assert!(field_error.to_string().contains(&field_name));
                prop_assert!(bounds_error.to_string().contains(&format!("{:#x}", offset)));
                prop_assert!(conversion_error.to_string().contains(&details));

                let truncated_msg = truncated_error.to_string();
                prop_assert!(truncated_msg.contains(&expected.to_string()));
                prop_assert!(truncated_msg.contains(&actual.to_string()));
            }

            #[test]
            fn io_error_conversion_preserves_source_message(reason in ".*") {
                let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, reason.clone());
                let converted: ReportError = io_err.into();
                match converted {
                    ReportError::File { source, .. } => {
                        prop_assert_eq!(source.to_string(), reason);
                    }
                    _ => prop_assert!(false, "Expected File error from io::Error conversion"),
                }
            }
        }
    }

    #[test]
    fn error_constructors_validation() {
        let file_error = ReportError::file_error(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );
        assert!(matches!(file_error, ReportError::File { .. }));

        let parse_error = ReportError::parse_error("ctx", "details");
        assert!(matches!(parse_error, ReportError::Parse { .. }));

        let bounds_error = ReportError::bounds_error(0x1000);
        assert!(matches!(bounds_error, ReportError::Bounds { .. }));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: ReportError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<ReportError>();

        let error = ReportError::parse_error("ctx", "details");
        let _: &dyn std::error::Error = &error;
    }
}
