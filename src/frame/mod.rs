//! frame — the table model shared by inputs and outputs.
//!
//! Purpose
//! -------
//! Define the minimal columnar table representation the histogram
//! transformer reads from and writes to: named, typed columns with display
//! metadata, grouped into equal-length frames.
//!
//! Key behaviors
//! -------------
//! - [`Field`] pairs a name and [`FieldConfig`] with typed cells
//!   ([`FieldValues`]); the cell variant determines the [`FieldType`].
//! - [`DataFrame::new`] validates equal column lengths and reports
//!   violations as [`FrameError`].
//!
//! Conventions
//! -----------
//! - Every cell is `Option<T>`; `None` is a missing value.
//! - Numeric cells are stored as `ndarray::Array1<Option<f64>>`.

pub mod data_frame;
pub mod errors;
pub mod field;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data_frame::DataFrame;
pub use self::errors::{FrameError, FrameResult};
pub use self::field::{Field, FieldConfig, FieldType, FieldValues};
