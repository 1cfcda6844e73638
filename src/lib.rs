//! rust_histogram — equal-width histograms over columnar frames, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the histogram transformation to Python via the `_rust_histogram` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing class and submodule used by the `rust_histogram` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`frame`, `alignment`, `histogram`) as
//!   the public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for the
//!   `_rust_histogram` Python extension.
//! - Create and register the `histogram` Python submodule under
//!   `rust_histogram` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All binning and alignment work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input conversion, and error mapping.
//! - Python inputs are converted into [`frame::DataFrame`] values before any
//!   histogram logic runs; `NaN` and `None` cells become missing values.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_rust_histogram.histogram` and are
//!   typically wrapped by a thin pure-Python facade in the top-level
//!   `rust_histogram` package.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`histogram`] (or its
//!   `prelude`) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   Rust integration test `tests/integration_histogram_pipeline.rs`.

pub mod alignment;
pub mod frame;
pub mod histogram;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    frame::{DataFrame, Field},
    histogram::{
        BUCKET_MAX_FIELD_NAME, BUCKET_MIN_FIELD_NAME, HistogramOptions, HistogramTransformer,
    },
    utils::{extract_frames, single_output_frame},
};

/// Histogram — Python-facing wrapper for the histogram transformer.
///
/// Purpose
/// -------
/// Run the histogram transformation on Python data and expose the resulting
/// bucket bounds and per-column counts as plain Python lists.
///
/// Parameters
/// ----------
/// Constructed from Python via `Histogram(frames, bucket_size=None, verbose=False)`:
/// - `frames`: `&PyAny`
///   Sequence of mappings, each mapping column names to 1-D numeric
///   array-likes (`numpy.ndarray`, `pandas.Series`, or sequences of floats
///   and `None`). Columns of one mapping must have equal length.
/// - `bucket_size`: `Option<f64>`
///   Fixed bucket width; `None` or `0` selects one automatically.
/// - `verbose`: `bool`
///   Log pipeline stages to the terminal (requires `obs_slog`).
///
/// Fields
/// ------
/// - `inner`: [`DataFrame`]
///   The histogram frame produced by [`HistogramTransformer::apply`].
///
/// Notes
/// -----
/// - An empty `frames` list yields an empty `Histogram` (no columns,
///   length 0), matching the transformer's no-op for an empty batch.
/// - Native Rust code should use [`HistogramTransformer`] directly; this
///   type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_histogram.histogram")]
pub struct Histogram {
    inner: DataFrame,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Histogram {
    #[new]
    #[pyo3(
        signature = (frames, bucket_size = None, verbose = false),
        text_signature = "(frames, /, bucket_size=None, verbose=False)"
    )]
    pub fn new<'py>(
        frames: &Bound<'py, PyAny>, bucket_size: Option<f64>, verbose: bool,
    ) -> PyResult<Self> {
        let opts = HistogramOptions::new(bucket_size)?.with_verbose(verbose);
        let frames = extract_frames(frames)?;

        let out = HistogramTransformer::new(opts).apply(frames)?;
        let inner = single_output_frame(out).map_err(|n| {
            PyValueError::new_err(format!("input is already binned into {n} histogram frames"))
        })?;
        Ok(Histogram { inner })
    }

    /// Inclusive lower bucket edges, ascending.
    #[getter]
    pub fn bucket_min(&self) -> Vec<f64> {
        present_cells(self.inner.field(BUCKET_MIN_FIELD_NAME))
    }

    /// Exclusive upper bucket edges, ascending.
    #[getter]
    pub fn bucket_max(&self) -> Vec<f64> {
        present_cells(self.inner.field(BUCKET_MAX_FIELD_NAME))
    }

    /// `(name, counts)` per source column; `None` marks a gap.
    #[getter]
    pub fn counts(&self) -> Vec<(String, Vec<Option<f64>>)> {
        self.inner
            .fields()
            .iter()
            .filter(|f| f.name != BUCKET_MIN_FIELD_NAME && f.name != BUCKET_MAX_FIELD_NAME)
            .filter_map(|f| f.numeric_values().map(|v| (f.name.clone(), v.to_vec())))
            .collect()
    }

    /// Output column names in order.
    #[getter]
    pub fn field_names(&self) -> Vec<String> {
        self.inner.fields().iter().map(|f| f.name.clone()).collect()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(feature = "python-bindings")]
fn present_cells(field: Option<&Field>) -> Vec<f64> {
    field
        .and_then(Field::numeric_values)
        .map(|values| values.iter().flatten().copied().collect())
        .unwrap_or_default()
}

/// Catalog bucket width for a value range.
///
/// Raises `ValueError` when `range` is NaN or exceeds the catalog.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(range, /)")]
pub fn select_bucket_size(range: f64) -> PyResult<f64> {
    Ok(histogram::select_bucket_size(range)?.get())
}

/// _rust_histogram — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `histogram` submodule and attach it to `_rust_histogram`.
/// - Register the submodule in `sys.modules` so it is importable as
///   `rust_histogram.histogram`.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_histogram<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let histogram_mod = PyModule::new(_py, "histogram")?;
    histogram_module(_py, m, &histogram_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_histogram.histogram", histogram_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn histogram_module<'py>(
    _py: Python, rust_histogram: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Histogram>()?;
    m.add_function(wrap_pyfunction!(select_bucket_size, m)?)?;
    rust_histogram.add_submodule(m)?;
    Ok(())
}
