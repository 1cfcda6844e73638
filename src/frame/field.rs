//! frame::field — typed, named columns with display metadata.
//!
//! Purpose
//! -------
//! Model a single table column: its name, its display configuration, and a
//! typed value sequence. The value variant determines the column's
//! [`FieldType`], so a column can never claim to be numeric while holding
//! text.
//!
//! Key behaviors
//! -------------
//! - [`FieldValues`] stores each column kind with an explicit missing case
//!   (`Option<T>` per cell).
//! - Numeric columns use `ndarray::Array1<Option<f64>>`; non-finite floats
//!   are interpreted as missing by the histogram pipeline.
//! - [`FieldConfig`] carries display metadata that is copied verbatim onto
//!   derived columns.
//!
//! Conventions
//! -----------
//! - Constructors take ownership of their value buffers; fields are never
//!   mutated in place by the histogram pipeline.
use ndarray::Array1;

/// Logical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Number,
    String,
    Time,
    Boolean,
}

/// Display metadata attached to a column.
///
/// None of these settings influence binning; they are preserved so that a
/// consumer rendering the histogram shows counts with the source field's
/// label and formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfig {
    /// Label shown instead of the raw field name.
    pub display_name: Option<String>,
    /// Unit identifier (e.g. `"ms"`, `"bytes"`).
    pub unit: Option<String>,
    /// Number of decimals to render.
    pub decimals: Option<u32>,
    /// Fixed axis minimum.
    pub min: Option<f64>,
    /// Fixed axis maximum.
    pub max: Option<f64>,
    /// Free-form description.
    pub description: Option<String>,
}

impl FieldConfig {
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }
}

/// Typed cell storage for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    Number(Array1<Option<f64>>),
    String(Vec<Option<String>>),
    /// Epoch milliseconds.
    Time(Vec<Option<i64>>),
    Boolean(Vec<Option<bool>>),
}

impl FieldValues {
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Number(values) => values.len(),
            FieldValues::String(values) => values.len(),
            FieldValues::Time(values) => values.len(),
            FieldValues::Boolean(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValues::Number(_) => FieldType::Number,
            FieldValues::String(_) => FieldType::String,
            FieldValues::Time(_) => FieldType::Time,
            FieldValues::Boolean(_) => FieldType::Boolean,
        }
    }
}

/// `Field` — one named, typed column.
///
/// Fields
/// ------
/// - `name`: `String`
///   Column name; histogram boundary columns use the reserved names
///   `BucketMin` and `BucketMax`.
/// - `config`: [`FieldConfig`]
///   Display metadata, preserved on derived count columns.
/// - `values`: [`FieldValues`]
///   Cell storage; the variant fixes the column's [`FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub config: FieldConfig,
    pub values: FieldValues,
}

impl Field {
    pub fn new(name: impl Into<String>, values: FieldValues) -> Self {
        Field { name: name.into(), config: FieldConfig::default(), values }
    }

    /// Numeric column from optional values; `None` marks a missing cell.
    pub fn number(name: impl Into<String>, values: Array1<Option<f64>>) -> Self {
        Field::new(name, FieldValues::Number(values))
    }

    /// Numeric column with every cell present.
    pub fn number_dense(name: impl Into<String>, values: &[f64]) -> Self {
        Field::number(name, values.iter().map(|&v| Some(v)).collect())
    }

    pub fn string(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Field::new(name, FieldValues::String(values))
    }

    pub fn time(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Field::new(name, FieldValues::Time(values))
    }

    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Field::new(name, FieldValues::Boolean(values))
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.values.field_type()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric cells, or `None` when the column is not numeric.
    pub fn numeric_values(&self) -> Option<&Array1<Option<f64>>> {
        match &self.values {
            FieldValues::Number(values) => Some(values),
            _ => None,
        }
    }

    /// Copy of this field with its metadata intact and its cells replaced.
    pub fn with_values(&self, values: FieldValues) -> Self {
        Field { name: self.name.clone(), config: self.config.clone(), values }
    }
}
