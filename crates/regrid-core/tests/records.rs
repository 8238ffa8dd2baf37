// File: crates/regrid-core/tests/records.rs
// Purpose: Validate the row-oriented adapter against the columnar resampler.

use regrid_core::{
    resample, resample_grouped, resample_rows, resample_rows_grouped, Cell, ColumnSpec, DataType,
    RowTable,
};

fn sample_rows() -> RowTable {
    let mut rows = RowTable::new(vec![
        ColumnSpec::new("t", DataType::Float),
        ColumnSpec::new("y", DataType::Float),
        ColumnSpec::new("z", DataType::Text),
    ]);
    rows.push_row(vec![
        Cell::Float(0.0),
        Cell::Float(10.0),
        Cell::Text("a".into()),
    ]);
    rows.push_row(vec![
        Cell::Float(2.0),
        Cell::Float(30.0),
        Cell::Text("b".into()),
    ]);
    rows
}

#[test]
fn round_trip_preserves_table() {
    let rows = sample_rows();
    let table = rows.to_table();
    assert_eq!(RowTable::from_table(&table), rows);
}

#[test]
fn resample_rows_matches_columnar_path() {
    let rows = sample_rows();
    let via_rows = resample_rows(&rows, "t", 1.0).unwrap();
    let via_table = resample(&rows.to_table(), "t", 1.0).unwrap();
    assert_eq!(via_rows.to_table(), via_table);

    // the midpoint got interpolated
    assert_eq!(via_rows.len(), 3);
    assert_eq!(via_rows.rows[1][1], Cell::Float(20.0));
    assert_eq!(via_rows.rows[1][2], Cell::Text("a".into()));
}

#[test]
fn resample_rows_grouped_matches_columnar_path() {
    let mut rows = RowTable::new(vec![
        ColumnSpec::new("t", DataType::Float),
        ColumnSpec::new("y", DataType::Float),
        ColumnSpec::new("grp", DataType::Text),
    ]);
    for (t, y, g) in [
        (0.0, 1.0, "A"),
        (2.0, 3.0, "A"),
        (0.0, 5.0, "B"),
        (2.0, 9.0, "B"),
    ] {
        rows.push_row(vec![Cell::Float(t), Cell::Float(y), Cell::Text(g.into())]);
    }

    let via_rows = resample_rows_grouped(&rows, "t", 1.0, "grp").unwrap();
    let via_table = resample_grouped(&rows.to_table(), "t", 1.0, "grp").unwrap();
    assert_eq!(via_rows.to_table(), via_table);
    assert_eq!(via_rows.len(), 6);
}

#[test]
fn null_cells_convert_both_ways() {
    let mut rows = RowTable::new(vec![
        ColumnSpec::new("t", DataType::Float),
        ColumnSpec::new("y", DataType::Float),
    ]);
    rows.push_row(vec![Cell::Float(0.0), Cell::Null]);
    rows.push_row(vec![Cell::Float(1.0), Cell::Float(2.0)]);

    let table = rows.to_table();
    assert!(table.column("y").is_some());
    assert_eq!(RowTable::from_table(&table), rows);
}

#[test]
fn errors_pass_through_the_adapter() {
    let rows = sample_rows();
    assert!(resample_rows(&rows, "missing", 1.0).is_err());
    assert!(resample_rows_grouped(&rows, "t", 0.0, "z").is_err());
}
