//! frame::data_frame — validated tables of equal-length columns.
//!
//! Purpose
//! -------
//! Provide the table container consumed and produced by the histogram
//! transformer. Construction validates that every column has the same
//! length, so downstream code can index rows without bounds surprises.
//!
//! Invariants & assumptions
//! ------------------------
//! - All fields of a [`DataFrame`] share one length, recorded in `length`.
//! - A frame with no fields has length zero.
//! - Field order is significant and preserved.
use crate::frame::{
    errors::{FrameError, FrameResult},
    field::{Field, FieldType},
};

/// `DataFrame` — an optionally named, ordered collection of columns.
///
/// Invariants
/// ----------
/// - `fields.iter().all(|f| f.len() == length)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    name: Option<String>,
    fields: Vec<Field>,
    length: usize,
}

impl DataFrame {
    /// Construct a validated [`DataFrame`].
    ///
    /// Parameters
    /// ----------
    /// - `name`: `Option<String>`
    ///   Optional frame name (query reference, series name, ...).
    /// - `fields`: `Vec<Field>`
    ///   Columns in display order. May be empty.
    ///
    /// Returns
    /// -------
    /// `FrameResult<DataFrame>`
    ///   - `Ok(DataFrame)` if all columns have the length of the first one.
    ///   - `Err(FrameError::LengthMismatch { .. })` naming the first column
    ///     whose length differs.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_histogram::frame::{DataFrame, Field};
    /// let frame = DataFrame::new(None, vec![Field::number_dense("x", &[1.0, 2.0])]).unwrap();
    /// assert_eq!(frame.len(), 2);
    /// ```
    pub fn new(name: Option<String>, fields: Vec<Field>) -> FrameResult<Self> {
        let length = fields.first().map_or(0, Field::len);
        for field in &fields {
            if field.len() != length {
                return Err(FrameError::LengthMismatch {
                    field: field.name.clone(),
                    expected: length,
                    actual: field.len(),
                });
            }
        }
        Ok(DataFrame { name, fields, length })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Numeric fields in column order.
    pub fn numeric_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.field_type() == FieldType::Number)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
