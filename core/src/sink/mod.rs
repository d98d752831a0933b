#![deny(missing_docs)]

//! # Sinks
//!
//! Tabular writers for flattened column records.
//!
//! - **traits**: Defines `TabularWriter` for implementing new output formats.
//! - **delimited**: CSV.
//! - **structured**: JSON and YAML arrays of objects.
//! - **spreadsheet**: XLSX workbooks (behind the `xlsx` feature).
//! - **format**: Picks a writer from a path or a name.

pub mod delimited;
pub mod format;
pub mod spreadsheet;
pub mod structured;
pub mod traits;

// Re-export for easier access downstream
pub use delimited::CsvWriter;
pub use format::OutputFormat;
pub use spreadsheet::XlsxWriter;
pub use structured::{JsonWriter, YamlWriter};
pub use traits::TabularWriter;
