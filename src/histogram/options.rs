//! histogram::options — configuration for the histogram transformer.
//!
//! Purpose
//! -------
//! Hold the user-facing knobs of the histogram pipeline in one validated
//! value: the optional fixed bucket size and the verbosity flag used by the
//! `obs_slog` observer.
//!
//! Invariants & assumptions
//! ------------------------
//! - `bucket_size` is `None` or a finite, non-negative number.
//! - `None` and `Some(0.0)` both request automatic bucket-size selection.
//! - A positive configured size is used as-is; its magnitude relative to
//!   the data is not checked.
use crate::histogram::{
    bucket_size::BucketSize,
    errors::{HistogramError, HistogramResult},
};

/// HistogramOptions — bucket-size policy and verbosity.
///
/// Fields
/// ------
/// - `bucket_size`: `Option<f64>`
///   Fixed bucket width. `None` or `0.0` selects a width automatically from
///   the catalog in [`bucket_size`](crate::histogram::bucket_size).
/// - `verbose`: `bool`
///   When `true` and the `obs_slog` feature is enabled, pipeline stages
///   are logged to the terminal.
///
/// Notes
/// -----
/// - The `Default` value is automatic selection, not verbose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistogramOptions {
    bucket_size: Option<f64>,
    pub verbose: bool,
}

impl HistogramOptions {
    /// Construct validated options.
    ///
    /// Parameters
    /// ----------
    /// - `bucket_size`: `Option<f64>`
    ///   `None`/`Some(0.0)` for automatic selection, otherwise the fixed
    ///   bucket width.
    ///
    /// Returns
    /// -------
    /// `HistogramResult<HistogramOptions>`
    ///   - `Ok(opts)` for `None` or a finite `value >= 0`.
    ///   - `Err(HistogramError::InvalidBucketSize { value })` for negative or
    ///     non-finite sizes.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_histogram::histogram::HistogramOptions;
    /// let auto = HistogramOptions::new(Some(0.0)).unwrap();
    /// assert!(auto.fixed_bucket_size().is_none());
    ///
    /// assert!(HistogramOptions::new(Some(-1.0)).is_err());
    /// ```
    pub fn new(bucket_size: Option<f64>) -> HistogramResult<Self> {
        if let Some(value) = bucket_size {
            if !value.is_finite() || value < 0.0 {
                return Err(HistogramError::InvalidBucketSize { value });
            }
        }
        Ok(HistogramOptions { bucket_size, verbose: false })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Raw configured value, as passed to [`HistogramOptions::new`].
    pub fn bucket_size(&self) -> Option<f64> {
        self.bucket_size
    }

    /// The manual override, if one is active (configured and non-zero).
    pub fn fixed_bucket_size(&self) -> Option<BucketSize> {
        self.bucket_size.filter(|&v| v > 0.0).map(BucketSize::new_unchecked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default and auto configurations (None and zero).
    // - Manual overrides passed through unchanged.
    // - Rejection of negative and non-finite sizes.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `None` and `Some(0.0)` both mean "select automatically".
    fn histogram_options_none_and_zero_request_auto_selection() {
        // Arrange
        let default = HistogramOptions::default();
        let zero = HistogramOptions::new(Some(0.0)).expect("zero is a valid auto marker");

        // Act / Assert
        assert!(default.fixed_bucket_size().is_none());
        assert!(zero.fixed_bucket_size().is_none());
        assert_eq!(zero.bucket_size(), Some(0.0));
        assert!(!default.verbose);
    }

    #[test]
    // Purpose
    // -------
    // A positive size is returned unchanged, even if unusually small.
    fn histogram_options_positive_size_is_used_unchanged() {
        let opts = HistogramOptions::new(Some(0.0003)).expect("positive size should validate");

        let size = opts.fixed_bucket_size().expect("override should be active");

        assert_eq!(size.get(), 0.0003);
    }

    #[test]
    fn histogram_options_negative_size_returns_invalid_bucket_size() {
        match HistogramOptions::new(Some(-5.0)) {
            Err(HistogramError::InvalidBucketSize { value }) => assert_eq!(value, -5.0),
            other => panic!("expected InvalidBucketSize, got {other:?}"),
        }
    }

    #[test]
    fn histogram_options_non_finite_size_returns_invalid_bucket_size() {
        assert!(HistogramOptions::new(Some(f64::NAN)).is_err());
        assert!(HistogramOptions::new(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn histogram_options_with_verbose_sets_flag() {
        let opts = HistogramOptions::default().with_verbose(true);
        assert!(opts.verbose);
    }
}
