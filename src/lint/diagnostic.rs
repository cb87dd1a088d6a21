//! Validation diagnostics.
//!
//! This module provides [`ValidationError`], one positioned finding in a
//! configuration document, and [`ConfigValidationResult`], the ordered
//! collection returned by a validation pass.

/// Severity level for validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory finding; the configuration still loads.
    Warning,
    /// The linter will reject or misread this configuration.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Category of a finding, used as a stable identifier in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// The document is not valid TOML.
    SyntaxError,
    /// A section header outside the known taxonomy.
    UnknownSection,
    /// A rule identifier that is not in the registry.
    UnknownRule,
    /// A key that the enclosing section does not accept.
    UnknownKey,
    /// A property that the enclosing rule does not declare.
    UnknownProperty,
    /// A value of the wrong type, out of range, or outside its enum.
    InvalidValue,
}

impl DiagnosticCode {
    /// Kebab-case identifier, e.g. `unknown-rule`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::SyntaxError => "syntax-error",
            DiagnosticCode::UnknownSection => "unknown-section",
            DiagnosticCode::UnknownRule => "unknown-rule",
            DiagnosticCode::UnknownKey => "unknown-key",
            DiagnosticCode::UnknownProperty => "unknown-property",
            DiagnosticCode::InvalidValue => "invalid-value",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured discriminant that quick-fix generation switches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unknown rule identifier with a close registered match.
    UnknownRuleSuggestion {
        /// The identifier as written.
        wrong: String,
        /// The suggested registered identifier.
        correct: String,
        /// Other identifiers exactly as close as `correct`. Non-empty means
        /// the typo is ambiguous.
        alternatives: Vec<String>,
    },
    /// A boolean property holding something other than `true`/`false`.
    BooleanExpected,
    /// Anything without an automatic fix.
    Generic,
}

/// A single finding in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Line number (0-indexed).
    pub line: usize,
    /// Character offset within the line (0-indexed, best effort).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Category of this finding.
    pub code: DiagnosticCode,
    /// Fix discriminant.
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Create a new finding at column 0 with no fix.
    pub fn new(
        code: DiagnosticCode,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column: 0,
            message: message.into(),
            severity,
            code,
            kind: ErrorKind::Generic,
        }
    }

    /// Create an error-severity finding.
    pub fn error(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, line, message)
    }

    /// Create a warning-severity finding.
    pub fn warning(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, line, message)
    }

    /// Set the column.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the fix discriminant.
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this finding has error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Outcome of validating one document.
///
/// `valid` is true iff `errors` is empty: a single warning also makes a
/// document invalid. Hosts that only care about error severity should use
/// [`ConfigValidationResult::has_errors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationResult {
    /// Whether no findings were produced.
    pub valid: bool,
    /// Findings in document order.
    pub errors: Vec<ValidationError>,
}

impl ConfigValidationResult {
    /// Build a result from findings.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A result without findings.
    pub fn ok() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_error()).count()
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .count()
    }

    /// Check if any finding has error severity.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(ValidationError::is_error)
    }
}

impl Default for ConfigValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
