//! histogram::transformer — the named histogram transformation.
//!
//! Purpose
//! -------
//! Wrap the frame builder behind a transformer with a stable identity
//! (`id`, `name`, `description`) and the no-op rules that decide when a
//! batch is passed through untouched.
//!
//! Key behaviors
//! -------------
//! - [`HistogramTransformer::apply`] returns the input unchanged when it is
//!   empty or when every frame already has the histogram layout; otherwise
//!   it returns exactly one histogram frame built from the remaining raw
//!   frames.
//! - [`HistogramTransformer::operator`] maps a stream of batches lazily,
//!   processing each batch independently.
//!
//! Conventions
//! -----------
//! - The aligner is a type parameter defaulting to [`UnionJoin`].
//! - One [`PipelineLog`] is created per transformer and reused for every
//!   batch.
use crate::{
    alignment::join::{Aligner, UnionJoin},
    frame::data_frame::DataFrame,
    histogram::{
        errors::HistogramResult,
        frame_builder::{build_histogram_logged, is_histogram_frame},
        observe::PipelineLog,
        options::HistogramOptions,
    },
};

/// Transformer identifier.
pub const HISTOGRAM_TRANSFORMER_ID: &str = "histogram";
/// Human-readable transformer name.
pub const HISTOGRAM_TRANSFORMER_NAME: &str = "Histogram";
/// One-line transformer description.
pub const HISTOGRAM_TRANSFORMER_DESCRIPTION: &str = "Calculate a histogram from input data";

/// HistogramTransformer — bins every numeric column of a batch of frames.
///
/// Fields
/// ------
/// - `opts`: [`HistogramOptions`]
///   Bucket-size policy and verbosity applied to every batch.
/// - `aligner`: `A`
///   Shared-axis join used by the frame builder.
/// - `log`: [`PipelineLog`]
///   Stage logger derived from `opts` (or attached by the caller).
#[derive(Debug, Clone)]
pub struct HistogramTransformer<A: Aligner = UnionJoin> {
    opts: HistogramOptions,
    aligner: A,
    log: PipelineLog,
}

impl HistogramTransformer<UnionJoin> {
    /// Transformer with the default [`UnionJoin`] aligner.
    pub fn new(opts: HistogramOptions) -> Self {
        HistogramTransformer::with_aligner(opts, UnionJoin)
    }
}

impl Default for HistogramTransformer<UnionJoin> {
    fn default() -> Self {
        HistogramTransformer::new(HistogramOptions::default())
    }
}

impl<A: Aligner> HistogramTransformer<A> {
    /// Transformer with a caller-supplied aligner.
    pub fn with_aligner(opts: HistogramOptions, aligner: A) -> Self {
        let log = PipelineLog::for_options(&opts);
        HistogramTransformer { opts, aligner, log }
    }

    /// Replace the stage logger.
    pub fn with_log(mut self, log: PipelineLog) -> Self {
        self.log = log;
        self
    }

    pub fn id(&self) -> &'static str {
        HISTOGRAM_TRANSFORMER_ID
    }

    pub fn name(&self) -> &'static str {
        HISTOGRAM_TRANSFORMER_NAME
    }

    pub fn description(&self) -> &'static str {
        HISTOGRAM_TRANSFORMER_DESCRIPTION
    }

    pub fn options(&self) -> &HistogramOptions {
        &self.opts
    }

    pub fn aligner(&self) -> &A {
        &self.aligner
    }

    /// Transform one batch of frames.
    ///
    /// Returns
    /// -------
    /// `HistogramResult<Vec<DataFrame>>`
    ///   - The input unchanged when it is empty.
    ///   - The input unchanged when every frame already has the histogram
    ///     layout (see [`is_histogram_frame`]).
    ///   - Otherwise a single-element vector holding the histogram of the
    ///     frames that do not already have the histogram layout; histogram
    ///     frames in a mixed batch are dropped, not re-binned.
    ///
    /// Errors
    /// ------
    /// Propagates every error of
    /// [`build_histogram`](crate::histogram::frame_builder::build_histogram).
    pub fn apply(&self, frames: Vec<DataFrame>) -> HistogramResult<Vec<DataFrame>> {
        if frames.is_empty() || frames.iter().all(is_histogram_frame) {
            return Ok(frames);
        }
        let raw: Vec<DataFrame> =
            frames.into_iter().filter(|frame| !is_histogram_frame(frame)).collect();
        let hist = build_histogram_logged(&raw, &self.opts, &self.aligner, &self.log)?;
        Ok(vec![hist])
    }

    /// Lazily apply the transformer to each batch of a stream.
    ///
    /// Batches are processed one at a time as the returned iterator is
    /// advanced; an error for one batch does not affect later batches.
    pub fn operator<'a, I>(
        &'a self, batches: I,
    ) -> impl Iterator<Item = HistogramResult<Vec<DataFrame>>> + 'a
    where
        I: IntoIterator<Item = Vec<DataFrame>>,
        I::IntoIter: 'a,
    {
        batches.into_iter().map(move |batch| self.apply(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        frame::field::Field,
        histogram::{
            errors::HistogramError,
            frame_builder::{BUCKET_MIN_FIELD_NAME, histogram_fields},
        },
    };

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Transformer identity.
    // - No-op rules (empty batch, already-binned batch) and mixed batches.
    // - Single-frame output for raw input.
    // - Lazy, per-batch streaming with independent errors.
    // -------------------------------------------------------------------------

    fn raw_frame(name: &str, values: &[f64]) -> DataFrame {
        DataFrame::new(None, vec![Field::number_dense(name, values)])
            .expect("test frame should validate")
    }

    fn fixed(size: f64) -> HistogramTransformer {
        HistogramTransformer::new(
            HistogramOptions::new(Some(size)).expect("test bucket size should validate"),
        )
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn transformer_identity_matches_registration() {
        let transformer = HistogramTransformer::default();

        assert_eq!(transformer.id(), "histogram");
        assert_eq!(transformer.name(), "Histogram");
        assert_eq!(transformer.description(), "Calculate a histogram from input data");
        assert_eq!(transformer.options(), &HistogramOptions::default());
        assert_send_sync::<HistogramTransformer>();
    }

    #[test]
    fn apply_empty_batch_is_a_no_op() {
        let out = HistogramTransformer::default().apply(Vec::new()).expect("no-op succeeds");

        assert!(out.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Raw input yields exactly one histogram frame, regardless of how many
    // frames the batch holds.
    fn apply_raw_batch_returns_single_histogram_frame() {
        // Arrange
        let batch = vec![raw_frame("a", &[1.0, 2.0]), raw_frame("b", &[3.0])];

        // Act
        let out = fixed(1.0).apply(batch).expect("histogram builds");

        // Assert
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].fields()[0].name, BUCKET_MIN_FIELD_NAME);
        assert_eq!(out[0].fields().len(), 4);
        assert_eq!(out[0].len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Output of a previous run is passed through rather than re-binned.
    fn apply_already_binned_batch_is_returned_unchanged() {
        // Arrange
        let transformer = fixed(5.0);
        let first = transformer
            .apply(vec![raw_frame("x", &[1.0, 2.0, 2.0, 3.0, 10.0])])
            .expect("histogram builds");

        // Act
        let second = transformer.apply(first.clone()).expect("no-op succeeds");

        // Assert
        assert_eq!(second, first);
    }

    #[test]
    // Purpose
    // -------
    // In a batch mixing histogram and raw frames, only the raw frames are
    // binned; the histogram frame's columns are not treated as data.
    //
    // Given
    // -----
    // - The histogram of x = [1, 7] followed by a raw frame y = [2].
    //
    // Expect
    // ------
    // - One frame with columns [BucketMin, BucketMax, y] and one bucket.
    // - The output classifies as a histogram with y as its only count.
    fn apply_mixed_batch_bins_only_raw_frames() {
        // Arrange
        let transformer = fixed(5.0);
        let mut batch =
            transformer.apply(vec![raw_frame("x", &[1.0, 7.0])]).expect("histogram builds");
        batch.push(raw_frame("y", &[2.0]));

        // Act
        let out = transformer.apply(batch).expect("histogram builds");

        // Assert
        assert_eq!(out.len(), 1);
        let names: Vec<&str> = out[0].fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["BucketMin", "BucketMax", "y"]);
        assert_eq!(out[0].len(), 1);
        let layout = histogram_fields(&out[0]).expect("output has histogram layout");
        assert_eq!(layout.counts.len(), 1);
        assert_eq!(layout.counts[0].name, "y");
    }

    #[test]
    // Purpose
    // -------
    // Each batch is processed independently; a failing batch does not stop
    // the stream.
    //
    // Given
    // -----
    // - Auto sizing; batch 1 is valid, batch 2 has only missing numeric
    //   cells, batch 3 is empty.
    //
    // Expect
    // ------
    // - Ok(one frame), Err(EmptyNumericSet), Ok(empty).
    fn operator_maps_batches_independently() {
        // Arrange
        let transformer = HistogramTransformer::default();
        let all_missing =
            DataFrame::new(None, vec![Field::number("x", ndarray::array![None])])
                .expect("test frame should validate");
        let batches = vec![vec![raw_frame("x", &[0.0, 97.0])], vec![all_missing], Vec::new()];

        // Act
        let results: Vec<_> = transformer.operator(batches).collect();

        // Assert
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(Vec::len), Ok(1));
        assert_eq!(results[1], Err(HistogramError::EmptyNumericSet));
        assert_eq!(results[2], Ok(Vec::new()));
    }

    #[test]
    fn operator_is_lazy() {
        let transformer = fixed(1.0);
        let mut stream = transformer.operator(
            (0..).map(|i| vec![raw_frame("x", &[f64::from(i)])]),
        );

        let first = stream.next().expect("stream yields").expect("histogram builds");

        assert_eq!(first.len(), 1);
    }
}
