//! histogram::binner — per-series frequency counts by bucket.
//!
//! Purpose
//! -------
//! Turn one numeric series into an ordered table of `(bucket key, count)`
//! bins. Every value is snapped to the inclusive lower edge of its bucket,
//! counted, filtered through an exclusion set, and sorted by key.
//!
//! Key behaviors
//! -------------
//! - [`BucketKey`] is a tagged key: a numeric lower edge or the `Missing`
//!   sentinel for absent/non-finite cells. It has total equality, hashing
//!   and ordering, so it can key a hash map and be sorted without relying
//!   on float quirks.
//! - [`histogram`] accepts any rounding function; [`bin_series`] is the
//!   floor-to-bucket form used by the frame builder.
//! - [`BinnerOptions`] controls the exclusion set (default: just
//!   `Missing`) and whether the output is sorted (default: yes).
//!
//! Invariants & assumptions
//! ------------------------
//! - Output keys are unique.
//! - With sorting on, output is strictly ascending by key.
//! - `Σ count` equals the number of input cells whose key is not excluded.
//! - Output depends only on the inputs; with sorting off the order is the
//!   order of first appearance, which is equally deterministic.
//!
//! Conventions
//! -----------
//! - Numeric keys are normalized so `-0.0` and `0.0` are the same bucket.
//! - `Missing` orders before every numeric key.
use crate::histogram::{
    bucket_size::BucketSize,
    errors::{HistogramError, HistogramResult},
    rounding::incr_round_dn,
};
use ndarray::ArrayView1;
use std::{
    cmp::Ordering,
    collections::{HashMap, hash_map::Entry},
    hash::{Hash, Hasher},
};

/// BucketKey — identity of a bucket within one series.
///
/// Variants
/// --------
/// - `Numeric(edge)`
///   Inclusive lower edge of a bucket.
/// - `Missing`
///   Sentinel bucket collecting missing and non-finite cells.
#[derive(Debug, Clone, Copy)]
pub enum BucketKey {
    Numeric(f64),
    Missing,
}

impl BucketKey {
    /// Key for a rounded value; non-finite values map to `Missing`.
    pub fn numeric(value: f64) -> Self {
        if value.is_finite() { BucketKey::Numeric(normalize_zero(value)) } else { BucketKey::Missing }
    }

    /// Lower edge for numeric keys, `None` for the sentinel.
    pub fn value(self) -> Option<f64> {
        match self {
            BucketKey::Numeric(edge) => Some(edge),
            BucketKey::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, BucketKey::Missing)
    }
}

#[inline]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl PartialEq for BucketKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BucketKey {}

impl Ord for BucketKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BucketKey::Missing, BucketKey::Missing) => Ordering::Equal,
            (BucketKey::Missing, BucketKey::Numeric(_)) => Ordering::Less,
            (BucketKey::Numeric(_), BucketKey::Missing) => Ordering::Greater,
            (BucketKey::Numeric(a), BucketKey::Numeric(b)) => {
                normalize_zero(*a).total_cmp(&normalize_zero(*b))
            }
        }
    }
}

impl PartialOrd for BucketKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BucketKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            BucketKey::Missing => state.write_u8(0),
            BucketKey::Numeric(edge) => {
                state.write_u8(1);
                state.write_u64(normalize_zero(*edge).to_bits());
            }
        }
    }
}

/// One `(key, count)` row of a series histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    pub key: BucketKey,
    pub count: u64,
}

/// BinnerOptions — exclusion and ordering policy.
///
/// Fields
/// ------
/// - `exclude`: `Vec<BucketKey>`
///   Keys dropped from the output. Defaults to `[BucketKey::Missing]`.
/// - `sort`: `bool`
///   Sort bins ascending by key. Defaults to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnerOptions {
    pub exclude: Vec<BucketKey>,
    pub sort: bool,
}

impl Default for BinnerOptions {
    fn default() -> Self {
        BinnerOptions { exclude: vec![BucketKey::Missing], sort: true }
    }
}

/// Count values per bucket using an arbitrary rounding function.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<Option<f64>>`
///   Series cells; `None` and non-finite values go to `BucketKey::Missing`.
/// - `round`: `Fn(f64) -> f64`
///   Maps a finite value to its bucket key. A non-finite result is treated
///   as `Missing`.
/// - `opts`: [`BinnerOptions`]
///   Exclusion set and sort flag.
///
/// Returns
/// -------
/// `Vec<HistogramBin>`
///   Unique keys with their counts, excluded keys removed, sorted ascending
///   when `opts.sort` is set (first-appearance order otherwise).
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_histogram::histogram::binner::{histogram, BinnerOptions, BucketKey};
/// # use rust_histogram::histogram::rounding::incr_round;
/// let values = array![Some(1.2), Some(0.9), None, Some(3.1)];
/// let bins = histogram(values.view(), |v| incr_round(v, 1.0), &BinnerOptions::default());
///
/// assert_eq!(bins.len(), 2);
/// assert_eq!(bins[0].key, BucketKey::Numeric(1.0));
/// assert_eq!(bins[0].count, 2);
/// ```
pub fn histogram<R>(
    values: ArrayView1<'_, Option<f64>>, round: R, opts: &BinnerOptions,
) -> Vec<HistogramBin>
where
    R: Fn(f64) -> f64,
{
    let mut slots: HashMap<BucketKey, usize> = HashMap::new();
    let mut bins: Vec<HistogramBin> = Vec::new();

    for cell in values.iter() {
        let key = match *cell {
            Some(v) if v.is_finite() => BucketKey::numeric(round(v)),
            _ => BucketKey::Missing,
        };
        match slots.entry(key) {
            Entry::Occupied(slot) => bins[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(bins.len());
                bins.push(HistogramBin { key, count: 1 });
            }
        }
    }

    bins.retain(|bin| !opts.exclude.contains(&bin.key));

    if opts.sort {
        bins.sort_by(|a, b| a.key.cmp(&b.key));
    }
    bins
}

/// Bin a series into buckets of width `bucket_size`.
///
/// Each finite value `v` lands in the bucket keyed
/// `floor(v / bucket_size) * bucket_size`, i.e. the inclusive lower edge of
/// `[edge, edge + bucket_size)`.
///
/// Errors
/// ------
/// - `HistogramError::KeyOverflow { value, size }`
///   A finite value whose bucket edge is not representable as a finite
///   `f64` (e.g. `1e308` with size `0.001`).
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_histogram::histogram::binner::{bin_series, BinnerOptions, BucketKey};
/// # use rust_histogram::histogram::bucket_size::BucketSize;
/// let values = array![Some(1.0), Some(2.0), Some(2.0), Some(3.0), Some(10.0)];
/// let size = BucketSize::new(5.0).unwrap();
/// let bins = bin_series(values.view(), size, &BinnerOptions::default()).unwrap();
///
/// let pairs: Vec<_> = bins.iter().map(|b| (b.key.value().unwrap(), b.count)).collect();
/// assert_eq!(pairs, vec![(0.0, 4), (10.0, 1)]);
/// ```
pub fn bin_series(
    values: ArrayView1<'_, Option<f64>>, bucket_size: BucketSize, opts: &BinnerOptions,
) -> HistogramResult<Vec<HistogramBin>> {
    let size = bucket_size.get();
    let overflow = values
        .iter()
        .flatten()
        .copied()
        .find(|&v| v.is_finite() && !incr_round_dn(v, size).is_finite());
    if let Some(value) = overflow {
        return Err(HistogramError::KeyOverflow { value, size });
    }
    Ok(histogram(values, |v| incr_round_dn(v, size), opts))
}
