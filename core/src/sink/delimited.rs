//! # CSV Writer

use crate::error::{AppError, AppResult};
use crate::report::{ColumnRecord, Projection};
use crate::sink::traits::TabularWriter;

/// Comma separated output, one header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl TabularWriter for CsvWriter {
    fn render(&self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(projection.headers())?;
        for record in records {
            wtr.write_record(record.cells(projection))?;
        }
        wtr.into_inner()
            .map_err(|e| AppError::General(format!("Failed to flush CSV: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(column: &str, comment: &str) -> ColumnRecord {
        ColumnRecord {
            table: "User".into(),
            column: column.into(),
            data_type: "String".into(),
            pk: false,
            nullable: true,
            unique: true,
            default: String::new(),
            comment: comment.into(),
        }
    }

    #[test]
    fn test_csv_full() {
        let bytes = CsvWriter
            .render(&[record("email", "")], Projection::Full)
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Table Name,Column Name,Data Type,PK,Nullable,Unique,Default,Comment",
                "User,email,String,N,Y,Y,,",
            ]
        );
    }

    #[test]
    fn test_csv_quotes_commas_and_quotes() {
        let bytes = CsvWriter
            .render(&[record("name", r#"first, "given" name"#)], Projection::Full)
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(r#""first, ""given"" name""#));
    }

    #[test]
    fn test_csv_minimal_header_only() {
        let bytes = CsvWriter.render(&[], Projection::Minimal).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap().trim_end(),
            "Table Name,Column Name,Data Type"
        );
    }
}
