//! histogram::frame_builder — assemble the histogram output frame.
//!
//! Purpose
//! -------
//! Orchestrate the full histogram transformation over a batch of frames:
//! resolve one bucket size, bin every numeric column independently, align
//! the binned columns on a shared bucket axis, and project the result into
//! a single output frame.
//!
//! Key behaviors
//! -------------
//! - [`build_histogram`] returns a frame with `BucketMin` (inclusive),
//!   `BucketMax` (exclusive), and one count column per numeric input
//!   field, in encounter order, carrying the source field's name and
//!   configuration.
//! - Count columns hold `None` where a series has no values in a bucket
//!   that another series populates.
//! - [`histogram_fields`] / [`is_histogram_frame`] classify a frame that
//!   already has the histogram layout. They are read-only queries.
//!
//! Invariants & assumptions
//! ------------------------
//! - `BucketMax[i] − BucketMin[i] == bucket_size` and `BucketMin` is
//!   strictly increasing.
//! - For every series, the sum of its present counts equals its number of
//!   finite input cells.
//! - Zero numeric fields yields `BucketMin`/`BucketMax` of length zero and
//!   no count columns; bucket-size resolution is skipped in that case.
//!
//! Conventions
//! -----------
//! - Frames are walked in order, and fields in order within each frame;
//!   that order fixes both the aligner input order and the output column
//!   order.
//! - Non-numeric columns are ignored and do not appear in the output.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference binning and alignment examples,
//!   metadata passthrough, the degenerate and error paths, and the
//!   classification accessor. The integration test in
//!   `tests/integration_histogram_pipeline.rs` exercises the pipeline
//!   through the public transformer.
use crate::{
    alignment::join::{AlignedData, Aligner, UnionJoin},
    frame::{
        data_frame::DataFrame,
        field::{Field, FieldType, FieldValues},
    },
    histogram::{
        binner::{BinnerOptions, HistogramBin, bin_series},
        bucket_size::{BucketSize, resolve_bucket_size},
        errors::HistogramResult,
        observe::PipelineLog,
        options::HistogramOptions,
    },
};
use ndarray::Array1;

/// Name of the inclusive lower-bound column.
pub const BUCKET_MIN_FIELD_NAME: &str = "BucketMin";
/// Name of the exclusive upper-bound column.
pub const BUCKET_MAX_FIELD_NAME: &str = "BucketMax";

/// HistogramFields — borrowed view of a frame with histogram layout.
///
/// Fields
/// ------
/// - `bucket_min`: the `BucketMin` column.
/// - `bucket_max`: the `BucketMax` column.
/// - `counts`: every other numeric column, in frame order.
#[derive(Debug, Clone)]
pub struct HistogramFields<'a> {
    pub bucket_min: &'a Field,
    pub bucket_max: &'a Field,
    pub counts: Vec<&'a Field>,
}

/// Locate the histogram columns of a frame.
///
/// Returns
/// -------
/// `Option<HistogramFields>`
///   `Some` when the frame has a `BucketMin` column, a `BucketMax` column,
///   and at least one other numeric column; `None` otherwise.
pub fn histogram_fields(frame: &DataFrame) -> Option<HistogramFields<'_>> {
    let mut bucket_min = None;
    let mut bucket_max = None;
    let mut counts = Vec::new();
    for field in frame.fields() {
        if field.name == BUCKET_MIN_FIELD_NAME {
            bucket_min = Some(field);
        } else if field.name == BUCKET_MAX_FIELD_NAME {
            bucket_max = Some(field);
        } else if field.field_type() == FieldType::Number {
            counts.push(field);
        }
    }
    match (bucket_min, bucket_max) {
        (Some(bucket_min), Some(bucket_max)) if !counts.is_empty() => {
            Some(HistogramFields { bucket_min, bucket_max, counts })
        }
        _ => None,
    }
}

/// Whether `frame` already has the histogram output layout.
pub fn is_histogram_frame(frame: &DataFrame) -> bool {
    histogram_fields(frame).is_some()
}

/// Build one histogram frame from a batch of input frames.
///
/// Parameters
/// ----------
/// - `frames`: `&[DataFrame]`
///   Input frames; every numeric column of every frame is binned.
/// - `opts`: [`HistogramOptions`]
///   Fixed bucket size or automatic selection, plus verbosity.
/// - `aligner`: `&impl Aligner`
///   Joins the per-series bins onto a shared bucket axis.
///
/// Returns
/// -------
/// `HistogramResult<DataFrame>`
///   A frame of length `|axis|` with columns `BucketMin`, `BucketMax`, and
///   one count column per numeric input field.
///
/// Errors
/// ------
/// - `HistogramError::EmptyNumericSet`
///   Automatic selection with numeric fields that hold no finite values.
/// - `HistogramError::BucketSizeOutOfRange { .. }`
///   Automatic selection over a range wider than the catalog allows.
/// - `HistogramError::KeyOverflow { .. }`
///   A finite value has no finite bucket edge at the resolved size.
/// - `HistogramError::Alignment(_)`
///   The aligner rejected the binned series.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_histogram::alignment::UnionJoin;
/// # use rust_histogram::frame::{DataFrame, Field};
/// # use rust_histogram::histogram::{build_histogram, HistogramOptions};
/// let frame = DataFrame::new(None, vec![Field::number_dense("x", &[1.0, 2.0, 2.0, 3.0, 10.0])])
///     .unwrap();
/// let opts = HistogramOptions::new(Some(5.0)).unwrap();
///
/// let hist = build_histogram(&[frame], &opts, &UnionJoin).unwrap();
///
/// assert_eq!(hist.len(), 2);
/// assert_eq!(hist.fields()[2].name, "x");
/// ```
pub fn build_histogram<A: Aligner>(
    frames: &[DataFrame], opts: &HistogramOptions, aligner: &A,
) -> HistogramResult<DataFrame> {
    let log = PipelineLog::for_options(opts);
    build_histogram_logged(frames, opts, aligner, &log)
}

/// [`build_histogram`] with the default [`UnionJoin`] aligner.
pub fn build_histogram_default(
    frames: &[DataFrame], opts: &HistogramOptions,
) -> HistogramResult<DataFrame> {
    build_histogram(frames, opts, &UnionJoin)
}

/// [`build_histogram`] reporting stages to an explicit [`PipelineLog`].
pub fn build_histogram_logged<A: Aligner>(
    frames: &[DataFrame], opts: &HistogramOptions, aligner: &A, log: &PipelineLog,
) -> HistogramResult<DataFrame> {
    let sources = collect_numeric_fields(frames);
    if sources.is_empty() {
        log.no_numeric_fields(frames.len());
        return empty_histogram_frame();
    }

    let (bucket_size, source) = resolve_bucket_size(frames, opts)?;
    log.bucket_size(bucket_size, source);

    let binner_opts = BinnerOptions::default();
    let binned = sources
        .iter()
        .map(|(field, values)| -> HistogramResult<Vec<(f64, u64)>> {
            let bins = bin_series(values.view(), bucket_size, &binner_opts)?;
            log.series_binned(&field.name, bins.len(), bins.iter().map(|b| b.count).sum());
            Ok(keyed_counts(&bins))
        })
        .collect::<HistogramResult<Vec<_>>>()?;

    let aligned = aligner.align(&binned)?;
    log.aligned(binned.len(), aligned.len());

    assemble_frame(aligned, bucket_size, &sources)
}

// ---- Helpers ----

/// Numeric fields across all frames, with their cells, in encounter order.
fn collect_numeric_fields(frames: &[DataFrame]) -> Vec<(&Field, &Array1<Option<f64>>)> {
    frames
        .iter()
        .flat_map(|frame| frame.fields())
        .filter_map(|field| field.numeric_values().map(|values| (field, values)))
        .collect()
}

/// Numeric bins as aligner input; sentinel bins never reach the axis.
fn keyed_counts(bins: &[HistogramBin]) -> Vec<(f64, u64)> {
    bins.iter().filter_map(|bin| bin.key.value().map(|edge| (edge, bin.count))).collect()
}

fn assemble_frame(
    aligned: AlignedData<u64>, bucket_size: BucketSize, sources: &[(&Field, &Array1<Option<f64>>)],
) -> HistogramResult<DataFrame> {
    let (axis, series) = aligned.into_parts();
    let width = bucket_size.get();

    let mut fields = Vec::with_capacity(sources.len() + 2);
    fields.push(Field::number(BUCKET_MIN_FIELD_NAME, axis.iter().map(|&edge| Some(edge)).collect()));
    fields.push(Field::number(
        BUCKET_MAX_FIELD_NAME,
        axis.iter().map(|&edge| Some(edge + width)).collect(),
    ));
    for ((field, _), counts) in sources.iter().zip(series) {
        let values: Array1<Option<f64>> =
            counts.into_iter().map(|count| count.map(|n| n as f64)).collect();
        fields.push(field.with_values(FieldValues::Number(values)));
    }

    Ok(DataFrame::new(None, fields)?)
}

fn empty_histogram_frame() -> HistogramResult<DataFrame> {
    let fields = vec![
        Field::number(BUCKET_MIN_FIELD_NAME, Array1::from(Vec::new())),
        Field::number(BUCKET_MAX_FIELD_NAME, Array1::from(Vec::new())),
    ];
    Ok(DataFrame::new(None, fields)?)
}
