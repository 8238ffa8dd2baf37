// File: crates/regrid-core/tests/csv_io.rs
// Purpose: Validate CSV read/write round trips and type inference.

use regrid_core::{io, resample, Column, Table};
use std::path::PathBuf;

fn out_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn round_trip_preserves_values_and_types() {
    let df = Table::new()
        .with_float("t", vec![0.0, 1.0, 2.5])
        .with_float("y", vec![10.0, 20.0, 30.0])
        .with_text("label", vec!["dog", "dog", "cat"]);

    let path = out_path("round_trip.csv");
    io::write_csv(&df, &path).expect("write csv");
    let back = io::read_csv(&path).expect("read csv");
    assert_eq!(df, back);
}

#[test]
fn numeric_inference_falls_back_to_text() {
    let path = out_path("mixed.csv");
    std::fs::write(&path, "t,tag\n1,alpha\n2,7\n").unwrap();

    let table = io::read_csv(&path).expect("read csv");
    assert!(matches!(table.column("t"), Some(Column::Float(_))));
    // one non-numeric field makes the whole column text
    assert!(matches!(table.column("tag"), Some(Column::Text(_))));
}

#[test]
fn blank_fields_become_missing_cells() {
    let path = out_path("blanks.csv");
    std::fs::write(&path, "t,y\n0,\n1,5\n").unwrap();

    let table = io::read_csv(&path).expect("read csv");
    match table.column("y").unwrap() {
        Column::Float(v) => assert_eq!(v, &vec![None, Some(5.0)]),
        Column::Text(_) => panic!("y should infer as float"),
    }
}

#[test]
fn loaded_csv_feeds_the_resampler() {
    let path = out_path("feed.csv");
    std::fs::write(&path, "t,y\n0,0\n2,20\n4,40\n").unwrap();

    let table = io::read_csv(&path).expect("read csv");
    let out = resample(&table, "t", 1.0).unwrap();
    assert_eq!(out.len(), 5);
    match out.column("y").unwrap() {
        Column::Float(v) => {
            assert_eq!(
                v,
                &vec![Some(0.0), Some(10.0), Some(20.0), Some(30.0), Some(40.0)]
            )
        }
        Column::Text(_) => panic!("y should be float"),
    }
}
