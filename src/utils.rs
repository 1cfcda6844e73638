//! utils — Python-to-frame conversion helpers for the PyO3 bindings.
//!
//! Everything except [`single_output_frame`] is compiled only with the
//! `python-bindings` feature. Numeric columns accept `numpy.ndarray`, `pandas.Series` (via
//! `to_numpy`), or plain sequences of floats and `None`; non-finite cells
//! become missing values.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    types::{PyAny, PyDict},
};

use crate::frame::DataFrame;

#[cfg(feature = "python-bindings")]
use crate::frame::Field;

/// Reduce a transformer result to the one frame a binding exposes.
///
/// Returns
/// -------
/// `Result<DataFrame, usize>`
///   - `Ok(DataFrame::default())` for an empty result (empty input batch).
///   - `Ok(frame)` for a single frame.
///   - `Err(n)` when `n > 1` already-binned frames were passed through.
pub fn single_output_frame(mut out: Vec<DataFrame>) -> Result<DataFrame, usize> {
    match out.len() {
        0 => Ok(DataFrame::default()),
        1 => Ok(out.remove(0)),
        n => Err(n),
    }
}

/// Convert a sequence of `{column name: array-like}` mappings into frames.
///
/// Column order follows the mapping's iteration order. Length mismatches
/// inside one mapping surface as `ValueError` through `FrameError`.
#[cfg(feature = "python-bindings")]
pub fn extract_frames<'py>(raw_frames: &Bound<'py, PyAny>) -> PyResult<Vec<DataFrame>> {
    let mut frames = Vec::new();
    for item in raw_frames.try_iter()? {
        let item = item?;
        let columns = item.downcast::<PyDict>().map_err(|_| {
            PyTypeError::new_err("each frame must be a dict mapping column names to arrays")
        })?;

        let mut fields = Vec::with_capacity(columns.len());
        for (key, value) in columns.iter() {
            let name: String = key.extract()?;
            let values = extract_numeric_column(&name, &value)?;
            fields.push(Field::number(name, values));
        }
        frames.push(DataFrame::new(None, fields)?);
    }
    Ok(frames)
}

/// Convert one 1-D array-like into numeric cells, mapping NaN/±∞/`None` to missing.
#[cfg(feature = "python-bindings")]
pub fn extract_numeric_column<'py>(
    name: &str, raw_column: &Bound<'py, PyAny>,
) -> PyResult<Array1<Option<f64>>> {
    if let Some(arr) = extract_f64_array(raw_column) {
        return Ok(arr.as_array().mapv(|v| v.is_finite().then_some(v)));
    }

    let cells: Vec<Option<f64>> = raw_column.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "column {name:?}: expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64"
        ))
    })?;
    Ok(cells.into_iter().map(|cell| cell.filter(|v| v.is_finite())).collect())
}

#[cfg(feature = "python-bindings")]
fn extract_f64_array<'py>(raw_column: &Bound<'py, PyAny>) -> Option<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_column.extract::<PyReadonlyArray1<f64>>() {
        return Some(arr_ro);
    }
    let series = raw_column.call_method0("to_numpy").ok()?;
    series.extract::<PyReadonlyArray1<f64>>().ok()
}
