#![deny(missing_docs)]

//! # Tabular Writer Trait
//!
//! Defines the interface an output format implements.

use crate::error::AppResult;
use crate::report::{ColumnRecord, Projection};

/// Renders records into the bytes of a destination file.
///
/// Rendering is pure so that the caller can write the destination exactly once.
pub trait TabularWriter {
    /// Encodes a header row followed by one row per record.
    ///
    /// # Arguments
    ///
    /// * `records` - Rows in output order.
    /// * `projection` - Which columns to emit.
    fn render(&self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>>;
}
