//! # Attribute Operations
//!
//! Internal logic for reading `@id`, `@unique`, `@default(...)` and the trailing
//! `//` comment out of the text that follows a field's type token.

use regex::Regex;
use std::sync::OnceLock;

/// Attributes extracted from the remainder of a single field line.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AttrInfo {
    /// Whether `@id` was found.
    pub is_primary_key: bool,
    /// Whether `@unique` was found.
    pub is_unique: bool,
    /// Contents of `@default(...)`, empty when absent.
    pub default_value: String,
    /// Trailing comment text, empty when absent.
    pub comment: String,
}

/// Analyzes the attribute text of a field line.
///
/// Markers and `@default(...)` are matched over the whole text, trailing comment included.
pub fn extract_attributes(attribute_text: &str) -> AttrInfo {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    let id_re = ID_RE.get_or_init(|| Regex::new(r"@id\b").expect("Invalid regex"));

    static UNIQUE_RE: OnceLock<Regex> = OnceLock::new();
    let unique_re = UNIQUE_RE.get_or_init(|| Regex::new(r"@unique\b").expect("Invalid regex"));

    AttrInfo {
        is_primary_key: id_re.is_match(attribute_text),
        is_unique: unique_re.is_match(attribute_text),
        default_value: extract_default(attribute_text)
            .unwrap_or_default()
            .to_string(),
        comment: trailing_comment(attribute_text)
            .map(|c| c.trim_start_matches('/').trim().to_string())
            .unwrap_or_default(),
    }
}

/// Text after the first `//` that is not inside a string literal.
fn trailing_comment(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return Some(&text[i + 2..]);
        }
    }

    None
}

/// Returns the verbatim contents of `@default(...)`, honouring nested parentheses.
fn extract_default(text: &str) -> Option<&str> {
    static DEFAULT_RE: OnceLock<Regex> = OnceLock::new();
    let default_re =
        DEFAULT_RE.get_or_init(|| Regex::new(r"@default\s*\(").expect("Invalid regex"));

    let start = default_re.find(text)?.end();
    let body = &text[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' if depth == 0 => return Some(&body[..i]),
            ')' => depth -= 1,
            _ => {}
        }
    }

    // Unbalanced: the default runs to the end of the line.
    Some(body.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_key_with_function_default() {
        let info = extract_attributes(" @id @default(autoincrement())");
        assert_eq!(
            info,
            AttrInfo {
                is_primary_key: true,
                is_unique: false,
                default_value: "autoincrement()".to_string(),
                comment: String::new(),
            }
        );
    }

    #[test]
    fn test_unique_without_default() {
        let info = extract_attributes(" @unique");
        assert!(info.is_unique);
        assert!(!info.is_primary_key);
        assert_eq!(info.default_value, "");
    }

    #[test]
    fn test_default_followed_by_other_attributes() {
        let info = extract_attributes(r#" @default(now()) @map("created_at")"#);
        assert_eq!(info.default_value, "now()");
    }

    #[test]
    fn test_default_with_quoted_parenthesis() {
        let info = extract_attributes(r#" @default(dbgenerated("gen_random_uuid(")) @db.Uuid"#);
        assert_eq!(info.default_value, r#"dbgenerated("gen_random_uuid(")"#);
    }

    #[test]
    fn test_unbalanced_default_runs_to_end() {
        let info = extract_attributes(" @default(cuid( ");
        assert_eq!(info.default_value, "cuid(");
    }

    #[test]
    fn test_comment_is_trimmed() {
        let info = extract_attributes(" // user's display name  ");
        assert_eq!(info.comment, "user's display name");
    }

    #[test]
    fn test_triple_slash_comment() {
        let info = extract_attributes(" @unique /// login handle");
        assert_eq!(info.comment, "login handle");
        assert!(info.is_unique);
    }

    #[test]
    fn test_slashes_inside_string_are_not_a_comment() {
        let info = extract_attributes(r#" @default("https://example.com") // homepage"#);
        assert_eq!(info.default_value, r#""https://example.com""#);
        assert_eq!(info.comment, "homepage");
    }

    #[test]
    fn test_markers_inside_comment_still_count() {
        let info = extract_attributes(" // was @id @unique @default(5)");
        assert_eq!(
            info,
            AttrInfo {
                is_primary_key: true,
                is_unique: true,
                default_value: "5".to_string(),
                comment: "was @id @unique @default(5)".to_string(),
            }
        );
    }

    #[test]
    fn test_marker_prefix_is_not_a_match() {
        let info = extract_attributes(" @identity @uniqueness");
        assert!(!info.is_primary_key);
        assert!(!info.is_unique);
    }

    #[test]
    fn test_empty_attribute_text() {
        assert_eq!(extract_attributes(""), AttrInfo::default());
    }
}
