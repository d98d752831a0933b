//! # Data Models
//!
//! Intermediate Representation (IR) for models extracted from a Prisma schema.

/// A single field line of a `model` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDescriptor {
    /// The field name.
    pub name: String,
    /// The base type. `?` is stripped, a `[]` list marker is kept (`Post[]`).
    pub data_type: String,
    /// Attribute text carries `@id`.
    pub is_primary_key: bool,
    /// Attribute text carries `@unique`.
    pub is_unique: bool,
    /// The raw type token carried `?`.
    pub is_nullable: bool,
    /// Verbatim contents of `@default(...)`, empty when absent.
    pub default_value: String,
    /// Trailing `//` comment, empty when absent.
    pub comment: String,
}

/// A `model <Name> { ... }` block and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// The model name.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// Creates an empty table, as seen right after its opening line.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

/// Something the scanner noticed but tolerated.
///
/// Diagnostics never change which tables or columns are produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    /// A body line that is not a field, comment or block attribute. It was dropped.
    #[display("line {line}: dropped unrecognized line in model '{model}': {text}")]
    MalformedField {
        /// 1-based line number.
        line: usize,
        /// The enclosing model.
        model: String,
        /// The trimmed line.
        text: String,
    },
    /// A `model X {` header inside an open model. It does not close the open model.
    #[display("line {line}: model '{name}' opened inside model '{model}' without a closing brace")]
    NestedModelHeader {
        /// 1-based line number.
        line: usize,
        /// The model that is still open.
        model: String,
        /// The name from the nested header.
        name: String,
    },
    /// Input ended while a model was open; it was flushed anyway.
    #[display("line {line}: model '{name}' is never closed")]
    UnterminatedModel {
        /// 1-based line number of the opening line.
        line: usize,
        /// The unterminated model.
        name: String,
    },
    /// A model name that was already produced earlier in the same input.
    #[display("line {line}: model '{name}' is declared more than once")]
    DuplicateModel {
        /// 1-based line number of the repeated opening line.
        line: usize,
        /// The repeated model name.
        name: String,
    },
}

impl Diagnostic {
    /// The 1-based source line the diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::MalformedField { line, .. }
            | Diagnostic::NestedModelHeader { line, .. }
            | Diagnostic::UnterminatedModel { line, .. }
            | Diagnostic::DuplicateModel { line, .. } => *line,
        }
    }
}

/// Tables plus everything the scan tolerated along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    /// Tables in order of appearance.
    pub tables: Vec<TableDescriptor>,
    /// Diagnostics in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}
