// File: crates/regrid-core/src/resample.rs
// Summary: Grid resampling by linear interpolation, ungrouped and grouped.

use log::debug;

use crate::error::ResampleError;
use crate::table::{Cell, Column, Table};

/// Arithmetic progression `lo, lo+step, lo+2*step, ...` up to and including
/// the last value `<= hi`. Each point is computed as `lo + i*step` so the
/// point count does not drift with accumulated rounding. `lo == hi` yields
/// a single point.
///
/// Generation stops early if `step` is below the rounding granularity at
/// `lo` (the sum stops advancing), keeping the output strictly increasing.
pub fn grid_points(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    let mut i = 0u64;
    loop {
        let v = lo + (i as f64) * step;
        if v > hi {
            break;
        }
        if let Some(&last) = out.last() {
            if v <= last {
                break;
            }
        }
        out.push(v);
        i += 1;
    }
    out
}

/// Resample `table` so that `axis_column` becomes the arithmetic grid
/// `[min, min+step, ...]` bounded by the original `[min, max]`, with every
/// other numeric column linearly interpolated onto that grid and text
/// columns forward-filled along it.
///
/// Numeric values are never extrapolated: a grid point outside a column's
/// known axis span yields a missing cell. A grid point that exactly matches
/// an original axis value takes the original value for all columns.
///
/// Tables with zero known axis rows produce a zero-row table with the input
/// schema; a single row produces a single grid point carrying that row.
pub fn resample(table: &Table, axis_column: &str, step: f64) -> Result<Table, ResampleError> {
    if !(step > 0.0) {
        return Err(ResampleError::InvalidStep(step));
    }
    let axis = numeric_column(table, axis_column)?;

    // Rows with a finite axis value, in stable ascending axis order.
    let mut knots: Vec<(f64, usize)> = axis
        .iter()
        .enumerate()
        .filter_map(|(row, v)| match v {
            Some(x) if !x.is_nan() => Some((*x, row)),
            _ => None,
        })
        .collect();
    knots.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if knots.is_empty() {
        debug!("resample: 0 usable rows on '{}', returning empty table", axis_column);
        return Ok(table.clear_like());
    }

    let lo = knots[0].0;
    let hi = knots[knots.len() - 1].0;
    let grid = grid_points(lo, hi, step);

    let mut out = Table::new();
    for (name, col) in table.columns() {
        let regridded = if name == axis_column {
            Column::Float(grid.iter().map(|&g| Some(g)).collect())
        } else {
            match col {
                Column::Float(values) => interpolate_column(values, &knots, &grid),
                Column::Text(values) => forward_fill_column(values, &knots, &grid),
            }
        };
        out = out.with_column(name, regridded);
    }

    debug!(
        "resample: {} rows -> {} grid points on '{}' (step {})",
        table.len(),
        grid.len(),
        axis_column,
        step
    );
    Ok(out)
}

/// Group-wise variant of [`resample`]: partition `table` by the distinct
/// values of `group_column` (first-seen order), resample each partition
/// independently with per-partition grid bounds, and concatenate the
/// results in partition order.
pub fn resample_grouped(
    table: &Table,
    axis_column: &str,
    step: f64,
    group_column: &str,
) -> Result<Table, ResampleError> {
    if !(step > 0.0) {
        return Err(ResampleError::InvalidStep(step));
    }
    numeric_column(table, axis_column)?;
    let group = table
        .column(group_column)
        .ok_or_else(|| ResampleError::ColumnNotFound(group_column.to_string()))?;

    // First-seen partition order is part of the contract, so this is a
    // linear key scan rather than a sorted map.
    let mut keys: Vec<Cell> = Vec::new();
    let mut partitions: Vec<Vec<usize>> = Vec::new();
    for row in 0..table.len() {
        let key = group.cell(row);
        match keys.iter().position(|k| key_matches(k, &key)) {
            Some(i) => partitions[i].push(row),
            None => {
                keys.push(key);
                partitions.push(vec![row]);
            }
        }
    }

    debug!(
        "resample_grouped: {} rows in {} partitions of '{}'",
        table.len(),
        partitions.len(),
        group_column
    );

    let mut parts = Vec::with_capacity(partitions.len());
    for rows in &partitions {
        parts.push(resample(&table.select_rows(rows), axis_column, step)?);
    }
    if parts.is_empty() {
        return Ok(table.clear_like());
    }
    Ok(Table::concat(&parts))
}

// ---- helpers ----------------------------------------------------------------

fn numeric_column<'t>(
    table: &'t Table,
    name: &str,
) -> Result<&'t Vec<Option<f64>>, ResampleError> {
    match table.column(name) {
        Some(Column::Float(values)) => Ok(values),
        _ => Err(ResampleError::ColumnNotFound(name.to_string())),
    }
}

/// Linear interpolation of one column onto the grid. `knots` holds every
/// (axis value, source row) pair in ascending axis order; rows where the
/// column itself is missing are skipped, so each column brackets over its
/// own known points.
fn interpolate_column(
    values: &[Option<f64>],
    knots: &[(f64, usize)],
    grid: &[f64],
) -> Column {
    let points: Vec<(f64, f64)> = knots
        .iter()
        .filter_map(|&(x, row)| values[row].map(|y| (x, y)))
        .collect();

    let out = grid
        .iter()
        .map(|&g| {
            // partition_point: first index whose axis value is > g.
            let pos = points.partition_point(|&(x, _)| x <= g);
            if pos > 0 && points[pos - 1].0 == g {
                // Exact axis match: take the original value. With duplicate
                // axis entries the first occurrence wins.
                let mut i = pos - 1;
                while i > 0 && points[i - 1].0 == g {
                    i -= 1;
                }
                return Some(points[i].1);
            }
            if pos == 0 || pos == points.len() {
                return None; // outside the known span, no extrapolation
            }
            let (x0, y0) = points[pos - 1];
            let (x1, y1) = points[pos];
            let t = (g - x0) / (x1 - x0);
            Some(y0 + (y1 - y0) * t)
        })
        .collect();
    Column::Float(out)
}

/// Forward-fill of a text column onto the grid: each grid point takes the
/// most recent known value at or before it along the sorted axis. Grid
/// points before the first known row stay missing.
fn forward_fill_column(
    values: &[Option<String>],
    knots: &[(f64, usize)],
    grid: &[f64],
) -> Column {
    let points: Vec<(f64, &String)> = knots
        .iter()
        .filter_map(|&(x, row)| values[row].as_ref().map(|s| (x, s)))
        .collect();

    let out = grid
        .iter()
        .map(|&g| {
            let pos = points.partition_point(|&(x, _)| x <= g);
            if pos == 0 {
                None
            } else {
                Some(points[pos - 1].1.clone())
            }
        })
        .collect();
    Column::Text(out)
}

/// Grouping key equality. Unlike `Cell`'s derived `PartialEq`, NaN keys
/// compare equal so they collect into one partition instead of one per row.
fn key_matches(a: &Cell, b: &Cell) -> bool {
    match (a, b) {
        (Cell::Float(x), Cell::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Cell::Text(x), Cell::Text(y)) => x == y,
        (Cell::Null, Cell::Null) => true,
        _ => false,
    }
}
