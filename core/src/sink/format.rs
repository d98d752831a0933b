//! # Output Format Selection

use crate::error::AppResult;
use crate::report::{ColumnRecord, Projection};
use crate::sink::{CsvWriter, JsonWriter, TabularWriter, XlsxWriter, YamlWriter};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported destination formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma separated values.
    #[default]
    Csv,
    /// Excel workbook.
    Xlsx,
    /// JSON array of objects.
    Json,
    /// YAML sequence of mappings.
    Yaml,
}

impl OutputFormat {
    /// Picks the format from the destination's extension. Unknown or missing extensions mean CSV.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }

    /// The writer for this format.
    pub fn writer(self) -> Box<dyn TabularWriter> {
        match self {
            OutputFormat::Csv => Box::new(CsvWriter),
            OutputFormat::Xlsx => Box::new(XlsxWriter),
            OutputFormat::Json => Box::new(JsonWriter),
            OutputFormat::Yaml => Box::new(YamlWriter),
        }
    }

    /// Shortcut for `self.writer().render(..)`.
    pub fn render(self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>> {
        self.writer().render(records, projection)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" => Ok(OutputFormat::Xlsx),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown output format `{}` (expected csv, xlsx, json or yaml)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
