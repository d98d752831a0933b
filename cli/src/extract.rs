#![deny(missing_docs)]

//! # Extract Command
//!
//! Implements the pipeline: schema file -> tables -> column records -> tabular file.

use crate::error::{CliError, CliResult};
use dbdef_core::{flatten, parse_with_diagnostics, AppError, OutputFormat, Projection};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the extract command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Path to the Prisma schema file.
    #[clap(long, env = "DBDEF_SCHEMA_PATH", default_value = "server/prisma/schema.prisma")]
    pub schema_path: PathBuf,

    /// Output path for the definition sheet.
    /// The format follows the extension (.csv, .xlsx, .json, .yaml/.yml) unless `--format` is set.
    #[clap(long, env = "DBDEF_OUTPUT", default_value = "database_definition.csv")]
    pub output: PathBuf,

    /// Explicit output format: csv, xlsx, json or yaml.
    #[clap(long, env = "DBDEF_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Only emit Table Name, Column Name and Data Type.
    #[clap(long)]
    pub minimal: bool,

    /// Fail instead of silently dropping lines the parser does not understand.
    #[clap(long)]
    pub strict: bool,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Number of models written.
    pub tables: usize,
    /// Number of rows written, header excluded.
    pub columns: usize,
    /// Format used for the destination.
    pub format: OutputFormat,
}

impl ExtractSummary {
    /// One-line success message for `output`.
    pub fn message(&self, output: &Path) -> String {
        format!(
            "Definition of {} table(s) / {} column(s) written to {} ({})",
            self.tables,
            self.columns,
            output.display(),
            self.format
        )
    }
}

/// Executes the extraction.
///
/// Nothing is written unless at least one model was found.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ExtractArgs) -> CliResult<ExtractSummary> {
    // 1. Read Schema
    let content = fs::read_to_string(&args.schema_path)
        .map_err(|e| CliError::InputNotFound(args.schema_path.clone(), e))?;

    // 2. Parse Models
    let outcome = parse_with_diagnostics(&content);
    for diagnostic in &outcome.diagnostics {
        log::warn!("{}: {}", args.schema_path.display(), diagnostic);
    }
    if args.strict && !outcome.diagnostics.is_empty() {
        return Err(CliError::Diagnostics(outcome.diagnostics.len()));
    }
    if outcome.tables.is_empty() {
        return Err(CliError::EmptyResult(args.schema_path.clone()));
    }

    // 3. Render
    let records = flatten(&outcome.tables);
    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));
    let projection = if args.minimal {
        Projection::Minimal
    } else {
        Projection::Full
    };
    log::debug!(
        "rendering {} record(s) from {} model(s) as {}",
        records.len(),
        outcome.tables.len(),
        format
    );
    let bytes = format
        .render(&records, projection)
        .map_err(|e| CliError::WriteFailure(args.output.clone(), e))?;

    // 4. Write File
    write_output(&args.output, &bytes)
        .map_err(|e| CliError::WriteFailure(args.output.clone(), e))?;

    log::info!("wrote {}", args.output.display());

    Ok(ExtractSummary {
        tables: outcome.tables.len(),
        columns: records.len(),
        format,
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}
