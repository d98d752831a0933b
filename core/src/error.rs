//! # Error Handling
//!
//! Provides the unified `AppError` enum used by the writers and shared with the CLI.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// The parser itself never fails; these errors come from rendering and persisting records.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for CSV encoding errors.
    #[display("CSV Error: {_0}")]
    Csv(csv::Error),

    /// Failure while encoding JSON, YAML or spreadsheet output.
    #[from(ignore)]
    #[display("Serialization Error: {_0}")]
    Serialization(String),

    /// The requested output needs a capability this build does not have.
    #[from(ignore)]
    #[display("Unsupported: {_0}")]
    Unsupported(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
