//! # Report Records
//!
//! Flattens parsed tables into one record per column, ready for a tabular writer.

use crate::parser::TableDescriptor;

/// Headers of the full projection, in output order.
pub const FULL_HEADERS: [&str; 8] = [
    "Table Name",
    "Column Name",
    "Data Type",
    "PK",
    "Nullable",
    "Unique",
    "Default",
    "Comment",
];

/// Headers of the reduced projection.
pub const MINIMAL_HEADERS: [&str; 3] = ["Table Name", "Column Name", "Data Type"];

/// Which columns of a record end up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// All eight columns.
    #[default]
    Full,
    /// Table, column and type only.
    Minimal,
}

impl Projection {
    /// Header row for this projection.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Projection::Full => &FULL_HEADERS,
            Projection::Minimal => &MINIMAL_HEADERS,
        }
    }
}

/// One output row: a column together with the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRecord {
    /// Owning table.
    pub table: String,
    /// Column name.
    pub column: String,
    /// Stored type (`?` stripped).
    pub data_type: String,
    /// Primary key flag.
    pub pk: bool,
    /// Nullable flag.
    pub nullable: bool,
    /// Unique flag.
    pub unique: bool,
    /// Default expression, possibly empty.
    pub default: String,
    /// Inline comment, possibly empty.
    pub comment: String,
}

impl ColumnRecord {
    /// Renders the record as cells matching `projection.headers()`.
    pub fn cells(&self, projection: Projection) -> Vec<String> {
        let mut cells = vec![
            self.table.clone(),
            self.column.clone(),
            self.data_type.clone(),
        ];
        if projection == Projection::Full {
            cells.extend([
                yes_no(self.pk).to_string(),
                yes_no(self.nullable).to_string(),
                yes_no(self.unique).to_string(),
                self.default.clone(),
                self.comment.clone(),
            ]);
        }
        cells
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Y"
    } else {
        "N"
    }
}

/// Flattens tables into records, keeping table order and column order.
pub fn flatten(tables: &[TableDescriptor]) -> Vec<ColumnRecord> {
    tables
        .iter()
        .flat_map(|table| {
            table.columns.iter().map(move |col| ColumnRecord {
                table: table.name.clone(),
                column: col.name.clone(),
                data_type: col.data_type.clone(),
                pk: col.is_primary_key,
                nullable: col.is_nullable,
                unique: col.is_unique,
                default: col.default_value.clone(),
                comment: col.comment.clone(),
            })
        })
        .collect()
}
