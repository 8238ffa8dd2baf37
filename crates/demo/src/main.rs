// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV table, resamples it onto a regular grid, and writes the result.

use anyhow::{Context, Result};
use regrid_core::{io, resample, resample_grouped, Table};
use regrid_plot::{theme, Footer};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Usage: regrid-demo [input.csv] [axis_column] [step] [group_column]
    let args: Vec<String> = std::env::args().skip(1).collect();

    let table = match args.first() {
        Some(raw) => {
            let path = Path::new(raw);
            println!("Using input file: {}", path.display());
            io::read_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given, using a generated sample");
            sample_table()
        }
    };

    let axis = args.get(1).map(String::as_str).unwrap_or("t");
    let step: f64 = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("bad step '{}'", s))?,
        None => 1.0,
    };
    println!("Loaded {} rows, {} columns", table.len(), table.width());

    let out_table = match args.get(3) {
        Some(group) => resample_grouped(&table, axis, step, group)?,
        None => resample(&table, axis, step)?,
    };
    println!(
        "Resampled onto '{}' with step {}: {} rows",
        axis,
        step,
        out_table.len()
    );

    let out = out_name(args.first().map(String::as_str));
    io::write_csv(&out_table, &out)?;
    println!("Wrote {}", out.display());

    let t = theme::find("gray");
    println!("Theme: {} ({}x{})", t.name, t.view_width, t.view_height);
    println!("{}", Footer::new().joined());
    Ok(())
}

/// Small irregular time series for running without an input file.
fn sample_table() -> Table {
    let t: Vec<f64> = vec![0.0, 2.5, 4.0, 7.5, 9.0];
    let y: Vec<f64> = t.iter().map(|&x| (x * 0.7).sin() * 10.0).collect();
    Table::new()
        .with_float("t", t)
        .with_float("y", y)
        .with_text("label", vec!["warmup", "warmup", "run", "run", "cooldown"])
}

/// Produce output file name like target/out/resampled_<stem>.csv
fn out_name(input: Option<&str>) -> PathBuf {
    let stem = input
        .map(Path::new)
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("resampled_{}.csv", stem))
}
