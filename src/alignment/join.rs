//! alignment::join — union join of sorted keyed series.
//!
//! Purpose
//! -------
//! Merge N independently sorted `(key, value)` series onto one shared,
//! ascending key axis, filling positions a series has no entry for with a
//! gap (`None`).
//!
//! Key behaviors
//! -------------
//! - [`Aligner`] is the seam the histogram frame builder depends on; any
//!   implementation honoring the contract below can be plugged in.
//! - [`UnionJoin`] is the default implementation: it validates its inputs,
//!   builds the sorted, deduplicated key union, and walks each series once
//!   against that axis.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs: each series is strictly increasing in its finite keys.
//! - Output: `axis` is the exhaustive, ascending union of all input keys and
//!   every aligned series has `axis.len()` entries.
//! - `aligned[i][j] == Some(v)` iff input `i` holds `(axis[j], v)`.
//!
//! Performance
//! -----------
//! - O(K log K) for the union sort, where K is the total number of input
//!   entries, plus O(N · |axis|) for the gap-filling pass.
use crate::alignment::errors::{AlignError, AlignResult};

/// `AlignedData` — shared axis plus one gap-aware column per input series.
///
/// Fields
/// ------
/// - `axis`: `Vec<f64>`
///   Sorted, deduplicated union of all input keys.
/// - `series`: `Vec<Vec<Option<V>>>`
///   One entry per input series, in input order, each of length
///   `axis.len()`. `None` marks a gap, never a zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedData<V> {
    axis: Vec<f64>,
    series: Vec<Vec<Option<V>>>,
}

impl<V> AlignedData<V> {
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn series(&self) -> &[Vec<Option<V>>] {
        &self.series
    }

    /// Axis length, shared by every aligned series.
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<Vec<Option<V>>>) {
        (self.axis, self.series)
    }
}

/// Aligner — merge sorted keyed series onto a shared axis.
///
/// Contract
/// --------
/// - Accepts N arrays, each a strictly increasing, duplicate-free sequence
///   of `(key, value)` pairs.
/// - Returns an [`AlignedData`] whose axis is the sorted, deduplicated union
///   of all keys and whose i-th series holds the value of input i at each
///   axis key, or `None` when input i has no entry for it.
/// - No key present in any input may be absent from the axis.
pub trait Aligner {
    fn align<V: Copy>(&self, inputs: &[Vec<(f64, V)>]) -> AlignResult<AlignedData<V>>;
}

/// UnionJoin — outer join on the key union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnionJoin;

impl Aligner for UnionJoin {
    /// Align `inputs` onto the union of their keys.
    ///
    /// Errors
    /// ------
    /// - `AlignError::NonFiniteKey { .. }` for a NaN/±∞ key.
    /// - `AlignError::NotStrictlyIncreasing { .. }` when a key does not
    ///   exceed its predecessor.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_histogram::alignment::{Aligner, UnionJoin};
    /// let a = vec![(0.0, 3_u64), (10.0, 1)];
    /// let b = vec![(10.0, 2_u64), (20.0, 4)];
    /// let aligned = UnionJoin.align(&[a, b]).unwrap();
    ///
    /// assert_eq!(aligned.axis(), &[0.0, 10.0, 20.0]);
    /// assert_eq!(aligned.series()[0], vec![Some(3), Some(1), None]);
    /// assert_eq!(aligned.series()[1], vec![None, Some(2), Some(4)]);
    /// ```
    fn align<V: Copy>(&self, inputs: &[Vec<(f64, V)>]) -> AlignResult<AlignedData<V>> {
        validate_sorted_inputs(inputs)?;

        let mut axis: Vec<f64> = inputs.iter().flatten().map(|&(key, _)| key).collect();
        axis.sort_by(f64::total_cmp);
        axis.dedup();

        let series = inputs.iter().map(|input| fill_gaps(&axis, input)).collect();
        Ok(AlignedData { axis, series })
    }
}

// ---- Helpers ----

fn validate_sorted_inputs<V>(inputs: &[Vec<(f64, V)>]) -> AlignResult<()> {
    for (series, input) in inputs.iter().enumerate() {
        let mut prev: Option<f64> = None;
        for (index, &(key, _)) in input.iter().enumerate() {
            if !key.is_finite() {
                return Err(AlignError::NonFiniteKey { series, index, key });
            }
            if prev.is_some_and(|p| key <= p) {
                return Err(AlignError::NotStrictlyIncreasing { series, index });
            }
            prev = Some(key);
        }
    }
    Ok(())
}

/// Walk one validated series against the axis, emitting `None` for keys it lacks.
fn fill_gaps<V: Copy>(axis: &[f64], input: &[(f64, V)]) -> Vec<Option<V>> {
    let mut entries = input.iter().peekable();
    axis.iter()
        .map(|&key| match entries.peek() {
            Some(&&(k, v)) if k == key => {
                entries.next();
                Some(v)
            }
            _ => None,
        })
        .collect()
}
