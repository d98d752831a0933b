//! # Structured Writers
//!
//! JSON and YAML renderings: an array of objects keyed by header name, keys in header order.

use crate::error::{AppError, AppResult};
use crate::report::{ColumnRecord, Projection};
use crate::sink::traits::TabularWriter;
use indexmap::IndexMap;

/// Pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

/// YAML sequence of mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlWriter;

fn rows(records: &[ColumnRecord], projection: Projection) -> Vec<IndexMap<&'static str, String>> {
    records
        .iter()
        .map(|record| {
            projection
                .headers()
                .iter()
                .copied()
                .zip(record.cells(projection))
                .collect()
        })
        .collect()
}

impl TabularWriter for JsonWriter {
    fn render(&self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>> {
        let mut out = serde_json::to_vec_pretty(&rows(records, projection))
            .map_err(|e| AppError::Serialization(format!("JSON serialization failed: {}", e)))?;
        out.push(b'\n');
        Ok(out)
    }
}

impl TabularWriter for YamlWriter {
    fn render(&self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>> {
        serde_yaml::to_string(&rows(records, projection))
            .map(String::into_bytes)
            .map_err(|e| AppError::Serialization(format!("YAML serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id_record() -> ColumnRecord {
        ColumnRecord {
            table: "User".into(),
            column: "id".into(),
            data_type: "Int".into(),
            pk: true,
            nullable: false,
            unique: false,
            default: "autoincrement()".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_json_keys_follow_header_order() {
        let bytes = JsonWriter.render(&[id_record()], Projection::Full).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let keys: Vec<&str> = value[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, Projection::Full.headers().to_vec());
        assert_eq!(value[0]["PK"], "Y");
        assert_eq!(value[0]["Default"], "autoincrement()");
    }

    #[test]
    fn test_json_empty_array() {
        let bytes = JsonWriter.render(&[], Projection::Full).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "[]\n");
    }

    #[test]
    fn test_yaml_minimal() {
        let bytes = YamlWriter
            .render(&[id_record()], Projection::Minimal)
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Table Name: User"));
        assert!(text.contains("Data Type: Int"));
        assert!(!text.contains("PK"));
    }
}
