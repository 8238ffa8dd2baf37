// File: crates/regrid-core/src/table.rs
// Summary: Columnar table model: named, equal-length columns of float or text cells.

/// Logical type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Float,
    Text,
}

/// A single cell value. `Null` marks a missing entry (blank CSV field,
/// an interpolation point outside a column's known span, or a text
/// column before its first known row).
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Float(f64),
    Text(String),
    Null,
}

impl Cell {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Schema entry: column name plus logical type.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub dtype: DataType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self { name: name.into(), dtype }
    }
}

/// Homogeneous column storage. Missing entries are `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn dtype(&self) -> DataType {
        match self {
            Column::Float(_) => DataType::Float,
            Column::Text(_) => DataType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `row`, cloned out of storage.
    pub fn cell(&self, row: usize) -> Cell {
        match self {
            Column::Float(v) => match v[row] {
                Some(x) => Cell::Float(x),
                None => Cell::Null,
            },
            Column::Text(v) => match &v[row] {
                Some(s) => Cell::Text(s.clone()),
                None => Cell::Null,
            },
        }
    }

    fn gather(&self, rows: &[usize]) -> Column {
        match self {
            Column::Float(v) => Column::Float(rows.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(rows.iter().map(|&i| v[i].clone()).collect()),
        }
    }

    fn append(&mut self, other: &Column) {
        match (self, other) {
            (Column::Float(a), Column::Float(b)) => a.extend(b.iter().copied()),
            (Column::Text(a), Column::Text(b)) => a.extend(b.iter().cloned()),
            _ => panic!("column type mismatch on concat"),
        }
    }

    fn empty_like(&self) -> Column {
        match self {
            Column::Float(_) => Column::Float(Vec::new()),
            Column::Text(_) => Column::Text(Vec::new()),
        }
    }
}

/// Ordered set of named columns, all sharing one row count.
/// Contract: construction panics on a length mismatch or duplicate name;
/// once built a table is never mutated by the resampler.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully-valued float column (builder style).
    pub fn with_float(self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.with_column(name, Column::Float(values.into_iter().map(Some).collect()))
    }

    /// Append a fully-valued text column (builder style).
    pub fn with_text(self, name: impl Into<String>, values: Vec<&str>) -> Self {
        self.with_column(
            name,
            Column::Text(values.into_iter().map(|s| Some(s.to_string())).collect()),
        )
    }

    /// Append a column as-is, missing entries included.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        let name = name.into();
        assert!(
            !self.names.iter().any(|n| *n == name),
            "duplicate column name '{name}'"
        );
        if let Some(first) = self.columns.first() {
            assert_eq!(
                first.len(),
                column.len(),
                "column '{name}' length does not match table"
            );
        }
        self.names.push(name);
        self.columns.push(column);
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Schema in column order.
    pub fn schema(&self) -> Vec<ColumnSpec> {
        self.columns()
            .map(|(name, col)| ColumnSpec::new(name, col.dtype()))
            .collect()
    }

    /// New table containing the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.gather(rows)).collect(),
        }
    }

    /// Zero-row table with this table's schema.
    pub fn clear_like(&self) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(Column::empty_like).collect(),
        }
    }

    /// Concatenate tables row-wise, in order. All parts must share the
    /// first part's schema. An empty slice yields an empty table.
    pub fn concat(parts: &[Table]) -> Table {
        let Some(first) = parts.first() else {
            return Table::new();
        };
        let mut out = first.clone();
        for part in &parts[1..] {
            assert_eq!(out.names, part.names, "schema mismatch on concat");
            for (dst, src) in out.columns.iter_mut().zip(part.columns.iter()) {
                dst.append(src);
            }
        }
        out
    }
}
