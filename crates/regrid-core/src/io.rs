// File: crates/regrid-core/src/io.rs
// Summary: CSV ingestion and egress for the columnar table model.

use std::path::Path;

use anyhow::{Context, Result};

use crate::table::{Column, Table};

/// Read a headered CSV file into a [`Table`].
///
/// Column types are inferred: a column where every non-empty field parses
/// as `f64` becomes a float column, anything else becomes text. Empty
/// fields become missing cells either way.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut fields: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        for (i, field) in rec.iter().enumerate() {
            if i < fields.len() {
                fields[i].push(field.trim().to_string());
            }
        }
        // Short records pad with blanks so columns stay aligned.
        for col in fields.iter_mut().skip(rec.len()) {
            col.push(String::new());
        }
    }

    let mut table = Table::new();
    for (name, raw) in headers.into_iter().zip(fields) {
        table = table.with_column(name, infer_column(&raw));
    }
    Ok(table)
}

/// Write a [`Table`] as headered CSV. Missing cells become empty fields.
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(table.names())?;
    for row in 0..table.len() {
        let record: Vec<String> = table
            .columns()
            .map(|(_, col)| match col {
                Column::Float(v) => v[row].map(|x| format_float(x)).unwrap_or_default(),
                Column::Text(v) => v[row].clone().unwrap_or_default(),
            })
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn infer_column(raw: &[String]) -> Column {
    let numeric = raw
        .iter()
        .filter(|s| !s.is_empty())
        .all(|s| s.parse::<f64>().is_ok());
    let any_value = raw.iter().any(|s| !s.is_empty());

    if numeric && any_value {
        Column::Float(
            raw.iter()
                .map(|s| if s.is_empty() { None } else { s.parse::<f64>().ok() })
                .collect(),
        )
    } else {
        Column::Text(
            raw.iter()
                .map(|s| if s.is_empty() { None } else { Some(s.clone()) })
                .collect(),
        )
    }
}

/// Plain decimal formatting; integral values drop the fraction so a
/// round-tripped integer axis stays readable.
fn format_float(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}
