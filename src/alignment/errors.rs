//! alignment::errors — contract violations detected by aligners.
//!
//! Purpose
//! -------
//! Describe inputs that break the aligner contract: every input series must
//! be a strictly increasing, duplicate-free sequence of finite keys.
//!
//! Conventions
//! -----------
//! - `series` is the 0-based position of the offending input array and
//!   `index` the 0-based position of the offending entry within it.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type AlignResult<T> = Result<T, AlignError>;

/// AlignError — rejected aligner inputs.
///
/// Variants
/// --------
/// - `NotStrictlyIncreasing { series, index }`
///   Key at `index` is not greater than the key before it (this covers
///   duplicates).
/// - `NonFiniteKey { series, index, key }`
///   Key at `index` is NaN or ±∞ and cannot be placed on an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignError {
    NotStrictlyIncreasing { series: usize, index: usize },
    NonFiniteKey { series: usize, index: usize, key: f64 },
}

impl std::error::Error for AlignError {}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignError::NotStrictlyIncreasing { series, index } => {
                write!(f, "Series {series} keys are not strictly increasing at index {index}.")
            }
            AlignError::NonFiniteKey { series, index, key } => {
                write!(f, "Series {series} has a non-finite key at index {index}: {key}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<AlignError> for PyErr {
    fn from(err: AlignError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
