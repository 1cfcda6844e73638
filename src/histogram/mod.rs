//! histogram — bin numeric columns into equal-width buckets.
//!
//! Purpose
//! -------
//! Turn a batch of frames into a single histogram frame: every numeric
//! column is counted into buckets of one shared width, and the per-column
//! counts are aligned on a common, ascending bucket axis.
//!
//! Key behaviors
//! -------------
//! - [`bucket_size`] picks the width: a fixed configured value, or the
//!   smallest catalog entry `s` in `{1, 2, 2.5, 5} × 10^k` with
//!   `range / 10 < s`.
//! - [`binner`] counts one series into `(bucket, count)` bins keyed by the
//!   inclusive lower edge; missing and non-finite cells are excluded.
//! - [`frame_builder`] drives the pipeline and projects aligned counts into
//!   `BucketMin` / `BucketMax` / count columns.
//! - [`transformer`] exposes the pipeline as a named transformation with
//!   no-op rules and a streaming operator.
//!
//! Invariants & assumptions
//! ------------------------
//! - A bucket is the half-open interval `[BucketMin, BucketMax)` and
//!   `BucketMax − BucketMin` equals the resolved width.
//! - Gaps in aligned count columns are `None`, never zero.
//! - Results are deterministic for identical inputs and options.
//!
//! Conventions
//! -----------
//! - Errors are reported as [`HistogramError`], which wraps
//!   [`AlignError`](crate::alignment::AlignError) and
//!   [`FrameError`](crate::frame::FrameError).
//! - Stage logging goes through [`observe::PipelineLog`] and is active only
//!   with the `obs_slog` feature and `HistogramOptions::verbose`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the full pipeline is also
//!   exercised by `tests/integration_histogram_pipeline.rs`.

pub mod binner;
pub mod bucket_size;
pub mod errors;
pub mod frame_builder;
pub mod observe;
pub mod options;
pub mod rounding;
pub mod transformer;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binner::{BinnerOptions, BucketKey, HistogramBin, bin_series, histogram};
pub use self::bucket_size::{
    BUCKET_SIZE_CATALOG, BucketSize, BucketSizeSource, resolve_bucket_size, select_bucket_size,
};
pub use self::errors::{HistogramError, HistogramResult};
pub use self::frame_builder::{
    BUCKET_MAX_FIELD_NAME, BUCKET_MIN_FIELD_NAME, HistogramFields, build_histogram,
    build_histogram_default, histogram_fields, is_histogram_frame,
};
pub use self::observe::PipelineLog;
pub use self::options::HistogramOptions;
pub use self::rounding::{incr_round, incr_round_dn, incr_round_up};
pub use self::transformer::HistogramTransformer;

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use rust_histogram::histogram::prelude::*;

pub mod prelude {
    pub use super::{
        BUCKET_MAX_FIELD_NAME, BUCKET_MIN_FIELD_NAME, HistogramError, HistogramOptions,
        HistogramResult, HistogramTransformer, build_histogram, is_histogram_frame,
    };
    pub use crate::alignment::{Aligner, UnionJoin};
    pub use crate::frame::{DataFrame, Field, FieldConfig, FieldType, FieldValues};
}
