#![deny(missing_docs)]

//! # dbdef Core
//!
//! Core library for turning Prisma schema files into database definition sheets.
//!
//! schema text → [`parse`] → [`flatten`] → [`OutputFormat::render`] → bytes for the destination file.

/// Shared error types.
pub mod error;

/// Schema text parsing.
pub mod parser;

/// Flat column records.
pub mod report;

/// Tabular output writers.
pub mod sink;

pub use error::{AppError, AppResult};
pub use parser::{
    parse, parse_with_diagnostics, ColumnDescriptor, Diagnostic, ParseOutcome, TableDescriptor,
};
pub use report::{flatten, ColumnRecord, Projection};
pub use sink::{OutputFormat, TabularWriter};
