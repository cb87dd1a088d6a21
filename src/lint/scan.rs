//! Line-level scanning of TOML documents.
//!
//! The validator walks the original text rather than the parsed tree so that
//! every finding keeps its line number. This module classifies single lines
//! ([`classify_line`]), walks a document while stepping over the inside of
//! multi-line arrays and strings ([`LineWalker`]), and provides the
//! parser-free syntax check used by [`ParseMode::LineScan`].
//!
//! [`ParseMode::LineScan`]: super::ParseMode::LineScan

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::{DiagnosticCode, ValidationError};
use super::span::byte_to_char;

/// UTF-8 byte-order mark some editors write at the start of a file.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

static TABLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[\s*([^\[\]]+?)\s*\]\s*(?:#.*)?$").expect("TABLE_HEADER_RE must compile")
});

static ARRAY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[\[\s*([^\[\]]+?)\s*\]\]\s*(?:#.*)?$").expect("ARRAY_HEADER_RE must compile")
});

static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*("(?:[^"\\]|\\.)*"|'[^']*'|[A-Za-z0-9_-]+)\s*=\s*(.*?)\s*$"#)
        .expect("KEY_VALUE_RE must compile")
});

/// What a single line of a document contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A `#` comment.
    Comment,
    /// A `[name]` or `[[name]]` header.
    Header {
        /// The name between the brackets, trimmed.
        name: &'a str,
        /// Whether this is an array-of-tables header.
        array: bool,
        /// Character offset of `name` within the line.
        name_column: usize,
    },
    /// A `key = value` pair.
    KeyValue {
        /// The key with surrounding quotes removed.
        key: String,
        /// Character offset of the key within the line.
        key_column: usize,
        /// Raw value text, trimmed, comments included.
        value: &'a str,
        /// Character offset of the value within the line.
        value_column: usize,
    },
    /// Anything else (continuations, malformed text).
    Other,
}

/// Classify one line of a document.
pub fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }

    if let Some(caps) = ARRAY_HEADER_RE.captures(line) {
        if let Some(name) = caps.get(1) {
            return Line::Header {
                name: name.as_str(),
                array: true,
                name_column: byte_to_char(line, name.start()),
            };
        }
    }
    if let Some(caps) = TABLE_HEADER_RE.captures(line) {
        if let Some(name) = caps.get(1) {
            return Line::Header {
                name: name.as_str(),
                array: false,
                name_column: byte_to_char(line, name.start()),
            };
        }
    }

    if let Some(caps) = KEY_VALUE_RE.captures(line) {
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            return Line::KeyValue {
                key: unquote(key.as_str()).to_string(),
                key_column: byte_to_char(line, key.start()),
                value: value.as_str(),
                value_column: byte_to_char(line, value.start()),
            };
        }
    }

    Line::Other
}

/// Remove one pair of matching surrounding quotes.
pub fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Split a dotted table name into its segments, unquoting each one.
pub fn split_dotted(name: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in name.chars() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            None if c == '.' => {
                segments.push(unquote(current.trim()).to_string());
                current.clear();
            }
            None => current.push(c),
        }
    }
    segments.push(unquote(current.trim()).to_string());

    segments
}

/// Cut a trailing `#` comment that is outside any string.
pub fn strip_comment(text: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return text[..i].trim_end(),
            None => {}
        }
    }

    text.trim_end()
}

/// Net count of `[` over `]` outside strings and comments.
pub fn bracket_balance(text: &str) -> i32 {
    let mut balance = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => break,
            None if c == '[' => balance += 1,
            None if c == ']' => balance -= 1,
            None => {}
        }
    }

    balance
}

/// The multi-line string delimiter a value opens without closing, if any.
fn opens_multiline_string(value: &str) -> Option<&'static str> {
    for delim in ["\"\"\"", "'''"] {
        if let Some(rest) = value.strip_prefix(delim) {
            if !rest.contains(delim) {
                return Some(delim);
            }
        }
    }
    None
}

/// Iterates over `(line_number, line_text, Line)` for lines that start a
/// statement, skipping the inside of multi-line arrays and strings.
pub struct LineWalker<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    open_brackets: i32,
    open_string: Option<&'static str>,
}

impl<'a> LineWalker<'a> {
    /// Start walking `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
            open_brackets: 0,
            open_string: None,
        }
    }

    /// Update continuation state for a line that was skipped.
    fn continue_statement(&mut self, text: &str) {
        if let Some(delim) = self.open_string {
            if text.contains(delim) {
                self.open_string = None;
            }
            return;
        }
        self.open_brackets = (self.open_brackets + bracket_balance(text)).max(0);
    }
}

impl<'a> Iterator for LineWalker<'a> {
    type Item = (usize, &'a str, Line<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (number, text) = self.lines.next()?;

            if self.open_string.is_some() || self.open_brackets > 0 {
                self.continue_statement(text);
                continue;
            }

            let line = classify_line(text);
            if let Line::KeyValue { value, .. } = &line {
                if let Some(delim) = opens_multiline_string(value) {
                    self.open_string = Some(delim);
                } else {
                    self.open_brackets = bracket_balance(value).max(0);
                }
            }

            return Some((number, text, line));
        }
    }
}

/// Parser-free syntax check.
///
/// Catches unterminated section headers and lines that are neither blank,
/// comments, headers, `key = value` pairs nor continuations of a multi-line
/// value. Returns the first problem found.
pub fn scan_syntax(content: &str) -> Option<ValidationError> {
    for (number, text, line) in LineWalker::new(content) {
        match line {
            Line::KeyValue { ref value, .. } if value.is_empty() => {
                return Some(ValidationError::error(
                    DiagnosticCode::SyntaxError,
                    number,
                    "Invalid syntax: expected a value after '='",
                ));
            }
            Line::Other => {
                let trimmed = text.trim_start();
                let message = if trimmed.starts_with('[') && !strip_comment(trimmed).ends_with(']')
                {
                    "Invalid syntax: unterminated section header"
                } else {
                    "Invalid syntax: expected 'key = value'"
                };
                return Some(ValidationError::error(
                    DiagnosticCode::SyntaxError,
                    number,
                    message,
                ));
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_blank_and_comment() {
        assert_eq!(classify_line("   "), Line::Blank);
        assert_eq!(classify_line("  # note"), Line::Comment);
    }

    #[test]
    fn classifies_table_header() {
        match classify_line("[rules.MD013]  # override") {
            Line::Header {
                name,
                array,
                name_column,
            } => {
                assert_eq!(name, "rules.MD013");
                assert!(!array);
                assert_eq!(name_column, 1);
            }
            other => panic!("Expected header, got {:?}", other),
        }
    }

    #[test]
    fn classifies_array_header() {
        assert!(matches!(
            classify_line("[[servers]]"),
            Line::Header { array: true, .. }
        ));
    }

    #[test]
    fn classifies_key_value() {
        match classify_line("  line_length = 80 # wide") {
            Line::KeyValue {
                key,
                key_column,
                value,
                value_column,
            } => {
                assert_eq!(key, "line_length");
                assert_eq!(key_column, 2);
                assert_eq!(value, "80 # wide");
                assert_eq!(value_column, 16);
            }
            other => panic!("Expected key/value, got {:?}", other),
        }
    }

    #[test]
    fn classifies_quoted_key() {
        match classify_line(r#""docs/*.md" = ["MD013"]"#) {
            Line::KeyValue { key, .. } => assert_eq!(key, "docs/*.md"),
            other => panic!("Expected key/value, got {:?}", other),
        }
    }

    #[test]
    fn classifies_continuation_as_other() {
        assert_eq!(classify_line(r#"    "MD001","#), Line::Other);
        assert_eq!(classify_line("]"), Line::Other);
    }

    #[test]
    fn splits_dotted_names() {
        assert_eq!(split_dotted("tool.rumdl.MD013"), vec!["tool", "rumdl", "MD013"]);
        assert_eq!(
            split_dotted(r#"tool."rumdl".per-file-ignores"#),
            vec!["tool", "rumdl", "per-file-ignores"]
        );
        assert_eq!(split_dotted(r#"a."b.c""#), vec!["a", "b.c"]);
    }

    #[test]
    fn strips_comments_outside_strings() {
        assert_eq!(strip_comment("80 # comment"), "80");
        assert_eq!(strip_comment(r#""a#b" # c"#), r#""a#b""#);
        assert_eq!(strip_comment("'x#y'"), "'x#y'");
    }

    #[test]
    fn counts_brackets_outside_strings() {
        assert_eq!(bracket_balance(r#"["MD001","#), 1);
        assert_eq!(bracket_balance(r#"["[", "]"]"#), 0);
        assert_eq!(bracket_balance("] # [[["), -1);
    }

    #[test]
    fn walker_skips_multiline_array_body() {
        let content = "[rules]\nselect = [\n  \"MD001\",\n  \"MD002\",\n]\nignore = []\n";
        let lines: Vec<usize> = LineWalker::new(content).map(|(n, _, _)| n).collect();
        assert_eq!(lines, vec![0, 1, 5]);
    }

    #[test]
    fn walker_skips_multiline_string_body() {
        let content = "[global]\nnote = \"\"\"\n[not-a-section]\n\"\"\"\nflavor = \"mkdocs\"\n";
        let lines: Vec<usize> = LineWalker::new(content).map(|(n, _, _)| n).collect();
        assert_eq!(lines, vec![0, 1, 4]);
    }

    #[test]
    fn scan_accepts_well_formed_document() {
        let content = "# settings\n[global]\ndisable = [\n  \"MD013\",\n]\n\n[MD007]\nindent = 4\n";
        assert!(scan_syntax(content).is_none());
    }

    #[test]
    fn scan_flags_unterminated_header() {
        let err = scan_syntax("[global]\n[rules\nselect = []\n").unwrap();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("unterminated section header"));
    }

    #[test]
    fn scan_flags_malformed_line() {
        let err = scan_syntax("[global]\nrespect_gitignore true\n").unwrap();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("expected 'key = value'"));
    }

    #[test]
    fn scan_flags_missing_value() {
        let err = scan_syntax("[global]\nflavor =\n").unwrap();
        assert_eq!(err.line, 1);
    }
}
