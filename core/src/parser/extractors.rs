//! # Extraction Logic
//!
//! Line-oriented scan of schema text into `TableDescriptor`s.
//!
//! The scanner has two states: outside a model, where only `model <Name> {` lines matter,
//! and inside a model, where every line is either the closing `}`, something to skip
//! (blank, `//` comment, `@@` block attribute) or a candidate field line.
//! A model is finalized only by its closing brace or by the end of the input.

use crate::parser::attributes::extract_attributes;
use crate::parser::models::{ColumnDescriptor, Diagnostic, ParseOutcome, TableDescriptor};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn model_re() -> &'static Regex {
    static MODEL_RE: OnceLock<Regex> = OnceLock::new();
    MODEL_RE.get_or_init(|| {
        Regex::new(r"^model\s+(\w+)\s*\{\s*(?://.*)?$").expect("Invalid regex")
    })
}

fn field_re() -> &'static Regex {
    static FIELD_RE: OnceLock<Regex> = OnceLock::new();
    FIELD_RE.get_or_init(|| Regex::new(r"^(\w+)\s+([\w\[\]?]+)(.*)$").expect("Invalid regex"))
}

/// Scanner state for a single parse run.
#[derive(Default)]
struct ScanState {
    /// The open model and the line it was opened on.
    current: Option<(TableDescriptor, usize)>,
    tables: Vec<TableDescriptor>,
    diagnostics: Vec<Diagnostic>,
    seen: HashSet<String>,
}

impl ScanState {
    fn open(&mut self, name: &str, line: usize) {
        log::trace!("line {}: opening model '{}'", line, name);
        if !self.seen.insert(name.to_string()) {
            self.diagnostics.push(Diagnostic::DuplicateModel {
                line,
                name: name.to_string(),
            });
        }
        self.current = Some((TableDescriptor::new(name), line));
    }

    fn close(&mut self) {
        if let Some((table, _)) = self.current.take() {
            log::debug!(
                "model '{}' finalized with {} column(s)",
                table.name,
                table.columns.len()
            );
            self.tables.push(table);
        }
    }

    fn body_line(&mut self, line: &str, line_no: usize) {
        let Some((table, _)) = self.current.as_mut() else {
            return;
        };

        if let Some(caps) = model_re().captures(line) {
            // Not a finalizer; falls through to the field pattern below.
            self.diagnostics.push(Diagnostic::NestedModelHeader {
                line: line_no,
                model: table.name.clone(),
                name: caps[1].to_string(),
            });
        }

        match parse_field(line) {
            Some(column) => table.columns.push(column),
            None => self.diagnostics.push(Diagnostic::MalformedField {
                line: line_no,
                model: table.name.clone(),
                text: line.to_string(),
            }),
        }
    }

    fn finish(mut self) -> ParseOutcome {
        if let Some((table, line)) = &self.current {
            self.diagnostics.push(Diagnostic::UnterminatedModel {
                line: *line,
                name: table.name.clone(),
            });
        }
        self.close();

        ParseOutcome {
            tables: self.tables,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parses schema text into tables, in declaration order.
///
/// Never fails: unrecognized lines are dropped and an input without models yields an empty vector.
pub fn parse(text: &str) -> Vec<TableDescriptor> {
    parse_with_diagnostics(text).tables
}

/// Same scan as [`parse`], additionally reporting what was tolerated.
pub fn parse_with_diagnostics(text: &str) -> ParseOutcome {
    let mut state = ScanState::default();

    for (idx, raw) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if state.current.is_none() {
            if let Some(caps) = model_re().captures(line) {
                state.open(&caps[1], line_no);
            }
            continue;
        }

        if line == "}" {
            state.close();
        } else if !is_skipped(line) {
            state.body_line(line, line_no);
        }
    }

    state.finish()
}

/// Blank lines, `//` comments and `@@` block attributes never become columns.
fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line.starts_with("@@")
}

/// Matches a trimmed body line against `<name> <type> <attributes...>`.
fn parse_field(line: &str) -> Option<ColumnDescriptor> {
    let caps = field_re().captures(line)?;
    let type_token = &caps[2];
    let attrs = extract_attributes(caps.get(3).map_or("", |m| m.as_str()));

    Some(ColumnDescriptor {
        name: caps[1].to_string(),
        data_type: type_token.replace('?', ""),
        is_primary_key: attrs.is_primary_key,
        is_unique: attrs.is_unique,
        is_nullable: type_token.contains('?'),
        default_value: attrs.default_value,
        comment: attrs.comment,
    })
}
