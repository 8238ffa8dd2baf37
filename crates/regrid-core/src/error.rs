// File: crates/regrid-core/src/error.rs
// Summary: Error type for the grid resampler.

use thiserror::Error;

/// Failures detected before any interpolation work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    /// The referenced column is absent from the input table (or, for the
    /// interpolation axis, no numeric column of that name exists).
    #[error("column '{0}' not found in table")]
    ColumnNotFound(String),

    /// The interpolation step must be positive.
    #[error("interpolation step must be > 0, got {0}")]
    InvalidStep(f64),
}
