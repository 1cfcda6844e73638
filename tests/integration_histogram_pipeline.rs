//! Integration tests for the histogram transformation.
//!
//! Purpose
//! -------
//! - Validate the end-to-end histogram pipeline: from validated input
//!   frames, through bucket-size resolution and per-series binning, to
//!   alignment and projection into one output frame.
//! - Exercise realistic mixed batches (several frames, non-numeric
//!   columns, missing cells) rather than single-series toy inputs only.
//!
//! Coverage
//! --------
//! - `histogram::transformer::HistogramTransformer`:
//!   - `apply` on raw, empty, already-binned, and mixed batches.
//!   - `operator` over a stream of independent batches.
//! - `histogram::frame_builder`:
//!   - Output layout, gap handling, and the classification accessor.
//! - `histogram::bucket_size`:
//!   - Automatic selection driven by the global range of all series.
//! - `alignment::Aligner`:
//!   - A caller-supplied aligner plugged into the transformer.
//!
//! Exclusions
//! ----------
//! - Catalog edge cases, key ordering, and aligner contract violations;
//!   these are covered by unit tests.
//! - Python bindings; those are exercised from the Python package.
use approx::assert_relative_eq;
use ndarray::array;
use rust_histogram::{
    alignment::{AlignResult, AlignedData, Aligner, UnionJoin},
    frame::{DataFrame, Field, FieldConfig},
    histogram::{
        BUCKET_MAX_FIELD_NAME, BUCKET_MIN_FIELD_NAME, HistogramError, HistogramOptions,
        HistogramTransformer, histogram_fields, is_histogram_frame,
    },
};
use std::cell::Cell;

/// Purpose
/// -------
/// Build a small monitoring-style frame: a time column, a host label, and
/// two numeric series with missing cells.
///
/// Returns
/// -------
/// - A validated `DataFrame` with columns `time`, `host`, `latency`,
///   `queue_depth`, where `latency` carries a unit in its config.
fn service_frame() -> DataFrame {
    let latency = Field::number(
        "latency",
        array![Some(12.0), Some(18.5), None, Some(31.0), Some(f64::NAN), Some(48.0)],
    )
    .with_config(FieldConfig::default().with_unit("ms"));
    let queue = Field::number(
        "queue_depth",
        array![Some(0.0), Some(3.0), Some(4.0), None, Some(9.0), Some(55.0)],
    );
    DataFrame::new(
        Some("service".into()),
        vec![
            Field::time("time", (0..6).map(Some).collect()),
            Field::string("host", vec![Some("a".into()); 6]),
            latency,
            queue,
        ],
    )
    .expect("service frame should validate")
}

/// Purpose
/// -------
/// Second frame whose values extend the global range to [−10, 62].
fn batch_frame() -> DataFrame {
    DataFrame::new(None, vec![Field::number_dense("jobs", &[-10.0, -2.0, 7.0, 62.0])])
        .expect("batch frame should validate")
}

fn counts(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    frame
        .field(name)
        .and_then(Field::numeric_values)
        .unwrap_or_else(|| panic!("numeric field {name} should exist"))
        .to_vec()
}

/// Aligner wrapper that counts invocations and delegates to `UnionJoin`.
#[derive(Default)]
struct CountingAligner {
    calls: Cell<usize>,
}

impl Aligner for CountingAligner {
    fn align<V: Copy>(&self, inputs: &[Vec<(f64, V)>]) -> AlignResult<AlignedData<V>> {
        self.calls.set(self.calls.get() + 1);
        UnionJoin.align(inputs)
    }
}

#[test]
// Purpose
// -------
// Full pipeline over a mixed batch with automatic bucket-size selection.
//
// Given
// -----
// - `service_frame` (latency, queue_depth) and `batch_frame` (jobs).
// - Global range 62 − (−10) = 72 → bucket size 10.
//
// Expect
// ------
// - One output frame with BucketMin, BucketMax, latency, queue_depth, jobs.
// - BucketMin spans [−10, 60] in steps of 10.
// - Gaps are None; present counts sum to each series' finite cell count.
fn histogram_pipeline_bins_mixed_batch_with_auto_size() {
    // Arrange
    let transformer = HistogramTransformer::default();

    // Act
    let out = transformer
        .apply(vec![service_frame(), batch_frame()])
        .expect("histogram pipeline should succeed");

    // Assert
    assert_eq!(out.len(), 1);
    let hist = &out[0];
    let names: Vec<&str> = hist.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![BUCKET_MIN_FIELD_NAME, BUCKET_MAX_FIELD_NAME, "latency", "queue_depth", "jobs"]
    );
    assert_eq!(hist.field("latency").map(|f| f.config.unit.clone()), Some(Some("ms".into())));

    let mins = counts(hist, BUCKET_MIN_FIELD_NAME);
    let expected_mins: Vec<Option<f64>> =
        [-10.0, 0.0, 10.0, 30.0, 40.0, 50.0, 60.0].into_iter().map(Some).collect();
    assert_eq!(mins, expected_mins);
    for (lo, hi) in mins.iter().zip(counts(hist, BUCKET_MAX_FIELD_NAME)) {
        assert_relative_eq!(hi.unwrap() - lo.unwrap(), 10.0);
    }

    // latency: 12, 18.5 → 10; 31 → 30; 48 → 40.
    assert_eq!(
        counts(hist, "latency"),
        vec![None, None, Some(2.0), Some(1.0), Some(1.0), None, None]
    );
    // queue_depth: 0, 3, 4, 9 → 0; 55 → 50.
    assert_eq!(
        counts(hist, "queue_depth"),
        vec![None, Some(4.0), None, None, None, Some(1.0), None]
    );
    // jobs: −10, −2 → −10; 7 → 0; 62 → 60.
    assert_eq!(
        counts(hist, "jobs"),
        vec![Some(2.0), Some(1.0), None, None, None, None, Some(1.0)]
    );
}

#[test]
// Purpose
// -------
// A transformer's own output is recognized and passed through unchanged,
// so chaining the transformer twice is idempotent.
fn histogram_pipeline_output_is_not_rebinned() {
    // Arrange
    let transformer = HistogramTransformer::new(
        HistogramOptions::new(Some(5.0)).expect("bucket size should validate"),
    );
    let first = transformer.apply(vec![batch_frame()]).expect("first pass should succeed");

    // Act
    let second = transformer.apply(first.clone()).expect("second pass should succeed");

    // Assert
    assert!(is_histogram_frame(&first[0]));
    let layout = histogram_fields(&first[0]).expect("output should have histogram layout");
    assert_eq!(layout.counts.len(), 1);
    assert_eq!(second, first);
}

#[test]
// Purpose
// -------
// Histogram frames mixed into a batch of raw frames are left out of the
// new histogram, so bucket bounds never appear as count columns.
//
// Given
// -----
// - The histogram of `batch_frame` (jobs), plus `service_frame`.
//
// Expect
// ------
// - Exactly one BucketMin and one BucketMax column.
// - Count columns are the raw series only: latency, queue_depth.
fn histogram_pipeline_mixed_batch_skips_histogram_frames() {
    // Arrange
    let transformer = HistogramTransformer::new(
        HistogramOptions::new(Some(10.0)).expect("bucket size should validate"),
    );
    let mut batch = transformer.apply(vec![batch_frame()]).expect("first pass should succeed");
    batch.push(service_frame());

    // Act
    let out = transformer.apply(batch).expect("mixed batch should succeed");

    // Assert
    assert_eq!(out.len(), 1);
    let names: Vec<&str> = out[0].fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![BUCKET_MIN_FIELD_NAME, BUCKET_MAX_FIELD_NAME, "latency", "queue_depth"]
    );
    let layout = histogram_fields(&out[0]).expect("output should have histogram layout");
    let count_names: Vec<&str> = layout.counts.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(count_names, vec!["latency", "queue_depth"]);
}

#[test]
// Purpose
// -------
// A caller-supplied aligner is used once per non-trivial batch and not at
// all for no-op batches.
fn histogram_pipeline_uses_custom_aligner() {
    // Arrange
    let transformer = HistogramTransformer::with_aligner(
        HistogramOptions::new(Some(1.0)).expect("bucket size should validate"),
        CountingAligner::default(),
    );

    // Act
    let binned = transformer.apply(vec![batch_frame()]).expect("binning should succeed");
    let empty = transformer.apply(Vec::new()).expect("empty batch is a no-op");
    let passthrough = transformer.apply(binned.clone()).expect("binned batch is a no-op");

    // Assert
    assert_eq!(binned.len(), 1);
    assert!(empty.is_empty());
    assert_eq!(passthrough, binned);
    assert_eq!(transformer.aligner().calls.get(), 1);
}

#[test]
// Purpose
// -------
// The streaming operator processes each batch on its own: bucket sizes
// are resolved per batch and an error in one batch does not leak into
// the next.
//
// Given
// -----
// - Batch 1: values over [0, 9] → bucket size 1.
// - Batch 2: values over [0, 1e6] → range beyond the catalog.
// - Batch 3: values over [0, 900] → bucket size 100.
fn histogram_pipeline_operator_isolates_batches() {
    // Arrange
    let transformer = HistogramTransformer::default();
    let frame = |values: &[f64]| {
        DataFrame::new(None, vec![Field::number_dense("x", values)])
            .expect("test frame should validate")
    };
    let batches = vec![
        vec![frame(&[0.0, 9.0])],
        vec![frame(&[0.0, 1e6])],
        vec![frame(&[0.0, 450.0, 900.0])],
    ];

    // Act
    let results: Vec<_> = transformer.operator(batches).collect();

    // Assert
    let width = |hist: &DataFrame| {
        let lo = counts(hist, BUCKET_MIN_FIELD_NAME)[0].unwrap();
        let hi = counts(hist, BUCKET_MAX_FIELD_NAME)[0].unwrap();
        hi - lo
    };
    let first = results[0].as_ref().expect("batch 1 should succeed");
    assert_relative_eq!(width(&first[0]), 1.0);
    assert!(matches!(results[1], Err(HistogramError::BucketSizeOutOfRange { .. })));
    let third = results[2].as_ref().expect("batch 3 should succeed");
    assert_relative_eq!(width(&third[0]), 100.0);
    assert_eq!(counts(&third[0], "x"), vec![Some(1.0), Some(1.0), Some(1.0)]);
}

#[test]
// Purpose
// -------
// Frames without numeric columns yield an empty histogram frame instead of
// an error, even with automatic sizing.
fn histogram_pipeline_without_numeric_columns_yields_empty_histogram() {
    let labels = DataFrame::new(None, vec![Field::string("host", vec![Some("a".into())])])
        .expect("label frame should validate");

    let out = HistogramTransformer::default().apply(vec![labels]).expect("should not fail");

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 0);
    assert_eq!(out[0].fields().len(), 2);
    assert!(!is_histogram_frame(&out[0]));
}
