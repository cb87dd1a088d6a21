//! Quick fixes and automatic fix application.
//!
//! [`quick_fixes`] turns a finding into zero or more candidate edits by
//! switching on its [`ErrorKind`]. [`FixEngine`] applies edits to text or to
//! files on disk.

use std::fs;
use std::path::Path;

use super::diagnostic::{ConfigValidationResult, ErrorKind, ValidationError};
use super::scan::{bracket_balance, classify_line, Line, BYTE_ORDER_MARK};
use super::span::{byte_to_char, char_to_byte, TextRange};
use crate::error::{ConfigError, Result};

/// A text edit that resolves a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAction {
    /// Short description shown to the user.
    pub title: String,
    /// The characters to replace.
    pub range: TextRange,
    /// Replacement text.
    pub replacement: String,
}

impl CodeAction {
    /// Create a new code action.
    pub fn new(title: impl Into<String>, range: TextRange, replacement: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range,
            replacement: replacement.into(),
        }
    }
}

/// Candidate fixes for a finding.
///
/// Never modifies `document`. Findings without a fix, or whose line no
/// longer contains the text the fix targets, yield an empty list. An
/// ambiguous rule suggestion yields one fix per equally close rule.
pub fn quick_fixes(document: &str, error: &ValidationError) -> Vec<CodeAction> {
    let Some(raw) = document.lines().nth(error.line) else {
        return Vec::new();
    };
    // Columns on the first line are counted after a byte-order mark.
    let (line, shift) = match raw.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) if error.line == 0 => (rest, 1),
        _ => (raw, 0),
    };

    match &error.kind {
        ErrorKind::UnknownRuleSuggestion {
            wrong,
            correct,
            alternatives,
        } => {
            let Some(from) = char_to_byte(line, error.column) else {
                return Vec::new();
            };
            let Some(byte) = line[from..].find(wrong.as_str()) else {
                return Vec::new();
            };
            let start = shift + byte_to_char(line, from + byte);
            let range = TextRange::new(error.line, start, start + wrong.chars().count());
            std::iter::once(correct)
                .chain(alternatives)
                .map(|candidate| {
                    CodeAction::new(format!("Change to '{}'", candidate), range, candidate.as_str())
                })
                .collect()
        }
        ErrorKind::BooleanExpected => {
            let Line::KeyValue {
                value,
                value_column,
                ..
            } = classify_line(line)
            else {
                return Vec::new();
            };
            // A multi-line value cannot be replaced from this line alone.
            if bracket_balance(value) != 0 {
                return Vec::new();
            }
            let start = shift + value_column;
            let range = TextRange::new(error.line, start, start + value.chars().count());
            ["true", "false"]
                .into_iter()
                .map(|literal| CodeAction::new(format!("Set to {}", literal), range, literal))
                .collect()
        }
        ErrorKind::Generic => Vec::new(),
    }
}

/// Fixes that can be applied without asking: one per finding that has
/// exactly one candidate. Ambiguous rule suggestions are left alone.
pub fn auto_fixes(document: &str, result: &ConfigValidationResult) -> Vec<CodeAction> {
    result
        .errors
        .iter()
        .filter_map(|error| {
            let mut fixes = quick_fixes(document, error);
            if fixes.len() == 1 {
                fixes.pop()
            } else {
                None
            }
        })
        .collect()
}

/// Outcome of applying fixes to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixResult {
    /// The document after applying fixes.
    pub content: String,
    /// Number of fixes applied.
    pub applied: usize,
    /// Fixes skipped because they overlapped another fix or fell outside the
    /// document.
    pub skipped: usize,
}

/// Engine for applying code actions.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply fixes to a document.
    ///
    /// Fixes are applied from the bottom of the document up so earlier
    /// edits do not shift later ranges. A fix that overlaps one already
    /// applied is skipped. Line endings are preserved.
    pub fn apply_to_text(&self, content: &str, fixes: &[CodeAction]) -> FixResult {
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

        let mut sorted: Vec<&CodeAction> = fixes.iter().collect();
        sorted.sort_by(|a, b| b.range.cmp(&a.range));

        let mut applied = 0;
        let mut skipped = 0;
        let mut last: Option<TextRange> = None;

        for fix in sorted {
            let range = fix.range;
            let overlaps = last.is_some_and(|prev| prev.line == range.line && range.end > prev.start);
            if overlaps {
                skipped += 1;
                continue;
            }

            let Some(line) = lines.get_mut(range.line) else {
                skipped += 1;
                continue;
            };
            let text = line.strip_suffix('\r').unwrap_or(line.as_str());
            let Some(bytes) = range.byte_range(text) else {
                skipped += 1;
                continue;
            };

            line.replace_range(bytes, &fix.replacement);
            applied += 1;
            last = Some(range);
        }

        FixResult {
            content: lines.join("\n"),
            applied,
            skipped,
        }
    }

    /// Apply fixes to a file in place and return how many were applied.
    ///
    /// The file is only rewritten when at least one fix applied.
    pub fn apply_to_file(&self, path: &Path, fixes: &[CodeAction]) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::DocumentNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io(e),
        })?;

        let result = self.apply_to_text(&content, fixes);
        if result.applied > 0 {
            fs::write(path, &result.content)?;
            tracing::debug!("Applied {} fix(es) to {}", result.applied, path.display());
        }
        if result.skipped > 0 {
            tracing::debug!("Skipped {} fix(es) in {}", result.skipped, path.display());
        }

        Ok(result.applied)
    }

    /// Describe fixes without applying them.
    pub fn preview(&self, path: &Path, fixes: &[CodeAction]) -> Vec<String> {
        fixes
            .iter()
            .map(|f| {
                format!(
                    "{}:{}:{}: {} (replace with '{}')",
                    path.display(),
                    f.range.line + 1,
                    f.range.start + 1,
                    f.title,
                    f.replacement
                )
            })
            .collect()
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}
