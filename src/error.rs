// In: src/error.rs

//! This module defines the single, unified error type for the entire HTF-INT library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Note what is *not* here: illegal symbols and version mismatches. Those degrade
//! (index 0) or warn (`log::warn!`) rather than fail, so they never become an `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HtfError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// No codebook is registered for the requested version tag.
    #[error("Unknown HTF version: {0}")]
    UnknownVersion(i64),

    /// The encoded form has no version tag (empty array).
    #[error("Malformed encoded form: {0}")]
    MalformedEncodedForm(String),

    /// A codebook document violated one of the table invariants.
    #[error("Invalid HTF table for version {version}: {reason}")]
    TableFormat { version: i64, reason: String },

    #[error("No HTF tables were registered")]
    EmptyRegistry,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Re-keying failed for submission '{file}': {source}")]
    Submission {
        file: String,
        #[source]
        source: Box<HtfError>,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., table file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a table or submission.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[cfg(feature = "python")]
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<pyo3::PyErr> for HtfError {
    fn from(err: pyo3::PyErr) -> Self {
        HtfError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<HtfError> for pyo3::PyErr {
    fn from(err: HtfError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = HtfError::UnknownVersion(7);
        assert_eq!(err.to_string(), "Unknown HTF version: 7");

        let err = HtfError::TableFormat {
            version: 3,
            reason: "entry 1 must be a control code".to_string(),
        };
        assert!(err.to_string().contains("version 3"));
        assert!(err.to_string().contains("control code"));
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse: Result<Vec<i64>, HtfError> =
            serde_json::from_str::<Vec<i64>>("[1, 2,").map_err(HtfError::from);
        assert!(matches!(parse, Err(HtfError::SerdeJson(_))));
    }
}
