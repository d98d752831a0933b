#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of Prisma schema text with a line-oriented scanner.
//! Extracts models, their fields, and per-field attributes (`@id`, `@unique`, `@default`, comments).

pub mod attributes;
pub mod extractors;
pub mod models;

// Re-export major types and functions
pub use extractors::{parse, parse_with_diagnostics};
pub use models::{ColumnDescriptor, Diagnostic, ParseOutcome, TableDescriptor};
