#![deny(missing_docs)]

//! # CLI Errors
//!
//! Failures reported at the boundary between file I/O and the parser.

use dbdef_core::AppError;
use derive_more::Display;
use std::path::PathBuf;

/// Main error enum for CLI operations.
#[derive(Debug, Display)]
pub enum CliError {
    /// The schema path does not resolve to a readable file.
    #[display("Schema file not found or unreadable: {} ({})", _0.display(), _1)]
    InputNotFound(PathBuf, std::io::Error),

    /// The schema was read and parsed but contains no models.
    #[display("No models found in {}", _0.display())]
    EmptyResult(PathBuf),

    /// Rendering or persisting the destination failed.
    #[display("Failed to write {}: {}", _0.display(), _1)]
    WriteFailure(PathBuf, AppError),

    /// `--strict` was given and the parser tolerated something.
    #[display("{} problem(s) found in schema (strict mode)", _0)]
    Diagnostics(usize),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_includes_cause() {
        let err = CliError::WriteFailure(
            PathBuf::from("out.xlsx"),
            AppError::Unsupported("no xlsx".into()),
        );
        assert_eq!(err.to_string(), "Failed to write out.xlsx: Unsupported: no xlsx");
    }

    #[test]
    fn test_not_found_message() {
        let err = CliError::InputNotFound(
            PathBuf::from("schema.prisma"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(
            err.to_string(),
            "Schema file not found or unreadable: schema.prisma (missing)"
        );
    }
}
