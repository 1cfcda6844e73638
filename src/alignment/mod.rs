//! alignment — shared-axis joins for sparse keyed series.
//!
//! Purpose
//! -------
//! Provide the aligner seam consumed by the histogram frame builder, plus a
//! default implementation. Binned series arrive as independently sorted
//! `(bucket, count)` arrays; the aligner places them on one ascending axis
//! with explicit gaps.
//!
//! Key behaviors
//! -------------
//! - [`Aligner`] states the contract (strictly increasing inputs in, shared
//!   axis and gap-aware columns out).
//! - [`UnionJoin`] implements it as an outer join on the key union and
//!   reports contract violations as [`AlignError`].
//!
//! Conventions
//! -----------
//! - Gaps are `None`; a present zero is `Some(0)`.
//! - Input order is preserved in the aligned output.

pub mod errors;
pub mod join;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{AlignError, AlignResult};
pub use self::join::{AlignedData, Aligner, UnionJoin};
