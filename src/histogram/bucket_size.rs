//! histogram::bucket_size — bucket width type and automatic selection.
//!
//! Purpose
//! -------
//! Decide the single bucket width shared by every series in one histogram
//! invocation. A configured, non-zero width is used unchanged; otherwise the
//! width is picked from a fixed catalog of "nice" magnitudes based on the
//! range of all numeric values.
//!
//! Key behaviors
//! -------------
//! - [`BucketSize`] guarantees a finite, strictly positive width.
//! - [`BUCKET_SIZE_CATALOG`] lists {1, 2, 2.5, 5} × 10^k for k = −3..=3 in
//!   ascending order (0.001 … 5000).
//! - [`select_bucket_size`] returns the smallest catalog entry `s` with
//!   `range / 10 < s`, aiming for roughly ten buckets across the data.
//! - [`resolve_bucket_size`] combines the override and the automatic path
//!   for a set of input frames.
//!
//! Invariants & assumptions
//! ------------------------
//! - `range = |max − min|` over finite values only; missing and non-finite
//!   cells are ignored.
//! - An empty value set and a range beyond the catalog ceiling are reported
//!   as errors. No fallback width is substituted.
//!
//! Performance
//! -----------
//! - One pass over all numeric cells to collect values, plus a binary search
//!   over the 28-entry catalog.
use crate::{
    frame::data_frame::DataFrame,
    histogram::{
        errors::{HistogramError, HistogramResult},
        options::HistogramOptions,
    },
};
use statrs::statistics::Statistics;

/// Ascending catalog of automatic bucket widths.
#[rustfmt::skip]
pub const BUCKET_SIZE_CATALOG: [f64; 28] = [
    0.001, 0.002, 0.0025, 0.005,
    0.01,  0.02,  0.025,  0.05,
    0.1,   0.2,   0.25,   0.5,
    1.0,   2.0,   2.5,    5.0,
    10.0,  20.0,  25.0,   50.0,
    100.0, 200.0, 250.0,  500.0,
    1000.0, 2000.0, 2500.0, 5000.0,
];

/// `BucketSize` — finite, strictly positive bucket width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BucketSize(f64);

impl BucketSize {
    /// Validate and wrap a bucket width.
    ///
    /// Errors
    /// ------
    /// - `HistogramError::InvalidBucketSize { value }` when `value` is not
    ///   finite or not strictly positive.
    pub fn new(value: f64) -> HistogramResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(HistogramError::InvalidBucketSize { value });
        }
        Ok(BucketSize(value))
    }

    /// Wrap a width already known to be finite and positive.
    pub(crate) fn new_unchecked(value: f64) -> Self {
        debug_assert!(value.is_finite() && value > 0.0);
        BucketSize(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// How the bucket width of a run was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSizeSource {
    /// Taken from the configuration.
    Fixed,
    /// Selected from [`BUCKET_SIZE_CATALOG`].
    Auto,
}

/// Pick the smallest catalog width exceeding a tenth of `range`.
///
/// Parameters
/// ----------
/// - `range`: `f64`
///   Absolute spread `|max − min|` of the values to bin.
///
/// Returns
/// -------
/// `HistogramResult<BucketSize>`
///   - `Ok(size)` with the smallest `s` in [`BUCKET_SIZE_CATALOG`] such
///     that `range / 10 < s`.
///   - `Err(HistogramError::EmptyNumericSet)` when `range` is NaN (no data).
///   - `Err(HistogramError::BucketSizeOutOfRange { range, max })` when
///     `range / 10 >= 5000`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_histogram::histogram::bucket_size::select_bucket_size;
/// assert_eq!(select_bucket_size(97.0).unwrap().get(), 10.0);
/// assert_eq!(select_bucket_size(0.0).unwrap().get(), 0.001);
/// ```
pub fn select_bucket_size(range: f64) -> HistogramResult<BucketSize> {
    if range.is_nan() {
        return Err(HistogramError::EmptyNumericSet);
    }
    let target = range / 10.0;
    let idx = BUCKET_SIZE_CATALOG.partition_point(|&size| target >= size);
    match BUCKET_SIZE_CATALOG.get(idx) {
        Some(&size) => Ok(BucketSize(size)),
        None => Err(HistogramError::BucketSizeOutOfRange {
            range,
            max: BUCKET_SIZE_CATALOG[BUCKET_SIZE_CATALOG.len() - 1],
        }),
    }
}

/// Spread `|max − min|` of a value set, or `None` when it is empty.
///
/// Min and max come from `statrs::statistics::Statistics`, one linear pass
/// each over the already collected finite values.
pub fn value_range(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let min = Statistics::min(values.iter());
    let max = Statistics::max(values.iter());
    Some((max - min).abs())
}

/// Finite numeric cells of every numeric field, in frame and field order.
pub fn collect_numeric_values(frames: &[DataFrame]) -> Vec<f64> {
    frames
        .iter()
        .flat_map(|frame| frame.numeric_fields())
        .filter_map(|field| field.numeric_values())
        .flat_map(|values| values.iter().filter_map(|v| v.filter(|x| x.is_finite())))
        .collect()
}

/// Resolve the bucket width for one run over `frames`.
///
/// Returns
/// -------
/// `HistogramResult<(BucketSize, BucketSizeSource)>`
///   The configured width when [`HistogramOptions::fixed_bucket_size`] is
///   set, otherwise the catalog width chosen by [`select_bucket_size`] for
///   the range of [`collect_numeric_values`].
///
/// Errors
/// ------
/// - `HistogramError::EmptyNumericSet` when auto-selecting without any
///   finite numeric value.
/// - `HistogramError::BucketSizeOutOfRange { .. }` when the range exceeds
///   the catalog.
pub fn resolve_bucket_size(
    frames: &[DataFrame], opts: &HistogramOptions,
) -> HistogramResult<(BucketSize, BucketSizeSource)> {
    if let Some(size) = opts.fixed_bucket_size() {
        return Ok((size, BucketSizeSource::Fixed));
    }
    let values = collect_numeric_values(frames);
    let range = value_range(&values).ok_or(HistogramError::EmptyNumericSet)?;
    Ok((select_bucket_size(range)?, BucketSizeSource::Auto))
}
