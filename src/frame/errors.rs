//! frame::errors — validation errors for the table model.
//!
//! Purpose
//! -------
//! Report structural problems detected while assembling a [`DataFrame`]
//! from its columns, so that downstream histogram code can rely on
//! equal-length columns without re-checking them.
//!
//! Conventions
//! -----------
//! - Messages name the offending column and both lengths.
//! - At the Python boundary every [`FrameError`] becomes a `ValueError`.
//!
//! [`DataFrame`]: crate::frame::data_frame::DataFrame

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised while constructing a table.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    /// A column's length differs from the length of the first column.
    LengthMismatch { field: String, expected: usize, actual: usize },
}

impl std::error::Error for FrameError {}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::LengthMismatch { field, expected, actual } => {
                write!(
                    f,
                    "Field '{field}' has {actual} values but the frame length is {expected}."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<FrameError> for PyErr {
    fn from(err: FrameError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that `LengthMismatch` names the field and both lengths.
    fn frame_error_length_mismatch_includes_payload_in_display() {
        // Arrange
        let err = FrameError::LengthMismatch { field: "latency".to_string(), expected: 4, actual: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("latency"), "message should name the field.\nGot: {msg}");
        assert!(msg.contains('4') && msg.contains('3'), "message should embed lengths.\nGot: {msg}");
    }
}
