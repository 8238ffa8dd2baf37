// File: crates/regrid-core/src/lib.rs
// Summary: Core library entry point; exports the table model and grid resampler.

pub mod error;
pub mod io;
pub mod records;
pub mod resample;
pub mod table;

pub use error::ResampleError;
pub use records::{resample_rows, resample_rows_grouped, RowTable};
pub use resample::{grid_points, resample, resample_grouped};
pub use table::{Cell, Column, ColumnSpec, DataType, Table};
