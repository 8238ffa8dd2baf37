// File: crates/regrid-core/src/records.rs
// Summary: Row-oriented table representation and resampling wrappers over it.
// Notes:
// - This layer converts representations only; all interpolation logic lives
//   in resample.rs.

use crate::error::ResampleError;
use crate::resample::{resample, resample_grouped};
use crate::table::{Cell, Column, ColumnSpec, DataType, Table};

/// Row-major table: a schema plus one `Vec<Cell>` per row.
/// Contract: every row has exactly `schema.len()` cells and each cell is
/// either `Null` or matches its column's declared type.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RowTable {
    pub schema: Vec<ColumnSpec>,
    pub rows: Vec<Vec<Cell>>,
}

impl RowTable {
    pub fn new(schema: Vec<ColumnSpec>) -> Self {
        Self { schema, rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(row.len(), self.schema.len(), "row width does not match schema");
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to the canonical columnar representation.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        for (i, spec) in self.schema.iter().enumerate() {
            let column = match spec.dtype {
                DataType::Float => {
                    Column::Float(self.rows.iter().map(|r| r[i].as_float()).collect())
                }
                DataType::Text => Column::Text(
                    self.rows
                        .iter()
                        .map(|r| r[i].as_text().map(str::to_string))
                        .collect(),
                ),
            };
            table = table.with_column(spec.name.clone(), column);
        }
        table
    }

    /// Convert back from the columnar representation.
    pub fn from_table(table: &Table) -> Self {
        let schema = table.schema();
        let rows = (0..table.len())
            .map(|row| table.columns().map(|(_, col)| col.cell(row)).collect())
            .collect();
        Self { schema, rows }
    }
}

/// Row-oriented wrapper for [`resample`]: convert, delegate, convert back.
pub fn resample_rows(
    rows: &RowTable,
    axis_column: &str,
    step: f64,
) -> Result<RowTable, ResampleError> {
    let out = resample(&rows.to_table(), axis_column, step)?;
    Ok(RowTable::from_table(&out))
}

/// Row-oriented wrapper for [`resample_grouped`].
pub fn resample_rows_grouped(
    rows: &RowTable,
    axis_column: &str,
    step: f64,
    group_column: &str,
) -> Result<RowTable, ResampleError> {
    let out = resample_grouped(&rows.to_table(), axis_column, step, group_column)?;
    Ok(RowTable::from_table(&out))
}
