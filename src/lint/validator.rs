//! Configuration document validation.
//!
//! [`ConfigValidator`] checks a TOML configuration document against a
//! [`SchemaRegistry`] in two stages:
//!
//! 1. **Syntax gate** - the whole document is parsed. A document that does
//!    not parse yields exactly one syntax error and nothing else.
//! 2. **Semantic walk** - the original text is walked line by line so every
//!    finding keeps its position. Headers switch the [`Section`] context;
//!    `key = value` lines are checked against the active context, using the
//!    typed value from the parsed tree.
//!
//! Each line contributes at most one finding.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::{
    ConfigValidationResult, DiagnosticCode, ErrorKind, ValidationError,
};
use super::scan::{scan_syntax, split_dotted, Line, LineWalker, BYTE_ORDER_MARK};
use super::section::{classify_section, valid_section_forms, DocumentKind, Section};
use super::span::byte_to_char;
use super::suggest::rule_suggestions;
use super::value::{check_property, ConfigValue};
use crate::schema::SchemaRegistry;

/// Extracts the line number from a parser error message.
static PARSER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)line\s+(\d+)").expect("PARSER_LINE_RE must compile"));

/// Array keys in `[global]` whose elements are rule identifiers.
const GLOBAL_RULE_LIST_KEYS: &[&str] = &["enable", "disable"];

/// How a document is parsed before the semantic walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Full TOML parse; typed values come from the parsed tree.
    #[default]
    Toml,
    /// No parser: a line scanner catches gross syntax errors and values are
    /// interpreted from their literal text.
    LineScan,
}

/// Validates configuration documents against a schema registry.
///
/// The validator holds no state between calls; the same instance can
/// validate any number of documents.
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator<'r> {
    registry: &'r SchemaRegistry,
    kind: DocumentKind,
    mode: ParseMode,
}

impl<'r> ConfigValidator<'r> {
    /// Create a validator for standalone documents.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            kind: DocumentKind::Standalone,
            mode: ParseMode::Toml,
        }
    }

    /// Set the document kind.
    pub fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the parse mode.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get the registry this validator checks against.
    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Get the document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Validate a document.
    ///
    /// Never fails: every problem, including unparsable input, is reported
    /// as a [`ValidationError`] in the result.
    pub fn validate_toml(&self, content: &str) -> ConfigValidationResult {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        let tree = match self.mode {
            ParseMode::Toml => match content.parse::<toml::Table>() {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::debug!("Document failed to parse: {}", e.message());
                    return ConfigValidationResult::from_errors(vec![syntax_error(&e)]);
                }
            },
            ParseMode::LineScan => {
                if let Some(error) = scan_syntax(content) {
                    return ConfigValidationResult::from_errors(vec![error]);
                }
                None
            }
        };

        let mut walk = Walk {
            validator: self,
            tree: tree.as_ref(),
            section: Section::Top,
            path: Vec::new(),
            errors: Vec::new(),
        };

        for (number, text, line) in LineWalker::new(content) {
            match line {
                Line::Header {
                    name, name_column, ..
                } => walk.enter_section(number, text, name, name_column),
                Line::KeyValue {
                    key,
                    key_column,
                    value,
                    value_column,
                } => {
                    let position = Position {
                        line: number,
                        key_column,
                        value_column,
                    };
                    if let Some(error) = walk.check_key(&key, value, position) {
                        walk.errors.push(error);
                    }
                }
                Line::Blank | Line::Comment | Line::Other => {}
            }
        }

        tracing::debug!(
            "Validated {} lines: {} finding(s)",
            content.lines().count(),
            walk.errors.len()
        );

        ConfigValidationResult::from_errors(walk.errors)
    }
}

/// Convert a parser failure into the single syntax error of a result.
fn syntax_error(error: &toml::de::Error) -> ValidationError {
    let rendered = error.to_string();
    let line = PARSER_LINE_RE
        .captures(&rendered)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .map(|line| line.saturating_sub(1))
        .unwrap_or(0);

    let message = error.message().trim();
    let message = if message.is_empty() {
        "Invalid syntax".to_string()
    } else {
        message.to_string()
    };

    ValidationError::error(DiagnosticCode::SyntaxError, line, message)
}

/// Where a `key = value` line sits.
#[derive(Debug, Clone, Copy)]
struct Position {
    line: usize,
    key_column: usize,
    value_column: usize,
}

/// Per-call walk state.
struct Walk<'v, 'r> {
    validator: &'v ConfigValidator<'r>,
    tree: Option<&'v toml::Table>,
    section: Section,
    path: Vec<String>,
    errors: Vec<ValidationError>,
}

impl Walk<'_, '_> {
    fn registry(&self) -> &SchemaRegistry {
        self.validator.registry
    }

    fn enter_section(&mut self, number: usize, text: &str, name: &str, name_column: usize) {
        self.path = split_dotted(name);
        self.section = classify_section(name, self.registry(), self.validator.kind);
        tracing::trace!("Line {}: [{}] -> {:?}", number, name, self.section);

        let finding = match &self.section {
            Section::Unknown => Some(
                ValidationError::warning(
                    DiagnosticCode::UnknownSection,
                    number,
                    format!(
                        "Unknown section '[{}]'. Valid sections: {}",
                        name,
                        valid_section_forms(&self.registry().tool)
                    ),
                )
                .with_column(name_column),
            ),
            Section::UnknownRule(rule) => {
                let column = text
                    .rfind(rule.as_str())
                    .map(|byte| byte_to_char(text, byte))
                    .unwrap_or(name_column);
                let error = unknown_rule_error(
                    self.registry(),
                    rule,
                    number,
                    format!("Unknown rule '{}'", rule),
                    DiagnosticCode::UnknownRule,
                    false,
                );
                Some(error.with_column(column))
            }
            _ => None,
        };

        if let Some(error) = finding {
            self.errors.push(error);
        }
    }

    /// Resolve the value of `key` in the current section.
    fn resolve(&self, key: &str, literal: &str) -> ConfigValue {
        self.tree
            .and_then(|tree| lookup(tree, &self.path, key))
            .map(ConfigValue::from_toml)
            .unwrap_or_else(|| ConfigValue::from_literal(literal))
    }

    fn check_key(&self, key: &str, literal: &str, at: Position) -> Option<ValidationError> {
        match &self.section {
            Section::Rules => self.check_rules_key(key, literal, at),
            Section::Files => self.check_files_key(key, literal, at),
            Section::Global => self.check_global_key(key, literal, at),
            Section::PerFileIgnores => self.check_per_file_ignores(key, literal, at),
            Section::Rule(rule) => self.check_rule_property(rule, key, literal, at),
            Section::Top | Section::UnknownRule(_) | Section::Unknown | Section::Foreign => None,
        }
    }

    fn check_rules_key(&self, key: &str, literal: &str, at: Position) -> Option<ValidationError> {
        let valid = &self.registry().rules_keys;
        if !valid.iter().any(|k| k == key) {
            return Some(unknown_key(key, "rules", valid, at));
        }

        let value = self.resolve(key, literal);
        let message = format!("'{}' in [rules] must be an array of rule names", key);
        let Some(items) = value.as_array() else {
            return Some(invalid_value(message, at));
        };
        self.check_rule_list(items, key, &message, at)
    }

    fn check_files_key(&self, key: &str, literal: &str, at: Position) -> Option<ValidationError> {
        let valid = &self.registry().files_keys;
        if !valid.iter().any(|k| k == key) {
            return Some(unknown_key(key, "files", valid, at));
        }

        let value = self.resolve(key, literal);
        let is_glob_list = value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| item.as_str().is_some()));
        if !is_glob_list {
            return Some(invalid_value(
                format!("'{}' in [files] must be an array of glob patterns", key),
                at,
            ));
        }
        None
    }

    fn check_global_key(&self, key: &str, literal: &str, at: Position) -> Option<ValidationError> {
        let Some(schema) = self.registry().global.get(key) else {
            let valid: Vec<String> = self.registry().global.keys().cloned().collect();
            return Some(unknown_key(key, "global", &valid, at));
        };

        let value = self.resolve(key, literal);
        if let Some((message, kind)) = check_property(&format!("'{}'", key), schema, &value) {
            return Some(invalid_value(message, at).with_kind(kind));
        }

        if GLOBAL_RULE_LIST_KEYS.contains(&key) {
            if let Some(items) = value.as_array() {
                let message = format!("'{}' in [global] must be an array of rule names", key);
                return self.check_rule_list(items, key, &message, at);
            }
        }
        None
    }

    fn check_per_file_ignores(
        &self,
        pattern: &str,
        literal: &str,
        at: Position,
    ) -> Option<ValidationError> {
        let value = self.resolve(pattern, literal);
        let Some(items) = value.as_array() else {
            return Some(invalid_value(
                format!(
                    "Value for pattern '{}' in [per-file-ignores] must be an array of rule names",
                    pattern
                ),
                at,
            ));
        };

        for item in items {
            let Some(rule) = item.as_str() else {
                return Some(invalid_value(
                    format!(
                        "Each rule for pattern '{}' in [per-file-ignores] must be a string",
                        pattern
                    ),
                    at,
                ));
            };
            if !self.registry().contains(rule) {
                let error = unknown_rule_error(
                    self.registry(),
                    rule,
                    at.line,
                    format!(
                        "Unknown rule '{}' in [per-file-ignores] for pattern '{}'",
                        rule, pattern
                    ),
                    DiagnosticCode::UnknownRule,
                    true,
                );
                return Some(error.with_column(at.value_column));
            }
        }
        None
    }

    fn check_rule_property(
        &self,
        rule: &str,
        key: &str,
        literal: &str,
        at: Position,
    ) -> Option<ValidationError> {
        let (_, schema) = self.registry().get(rule)?;

        let Some(property) = schema.properties.get(key) else {
            let message = if schema.properties.is_empty() {
                format!("Rule {} does not support configuration properties", rule)
            } else {
                format!(
                    "Unknown property '{}' for rule {}. Valid properties: {}",
                    key,
                    rule,
                    schema.property_names().join(", ")
                )
            };
            return Some(
                ValidationError::warning(DiagnosticCode::UnknownProperty, at.line, message)
                    .with_column(at.key_column),
            );
        };

        let value = self.resolve(key, literal);
        check_property(&format!("'{}'", key), property, &value)
            .map(|(message, kind)| invalid_value(message, at).with_kind(kind))
    }

    /// Check the elements of a rule-list array (`select`, `enable`, ...).
    ///
    /// Non-string elements are errors; unregistered ids are warnings.
    fn check_rule_list(
        &self,
        items: &[ConfigValue],
        key: &str,
        type_message: &str,
        at: Position,
    ) -> Option<ValidationError> {
        for item in items {
            let Some(rule) = item.as_str() else {
                return Some(invalid_value(type_message.to_string(), at));
            };
            if rule.eq_ignore_ascii_case("all") || self.registry().contains(rule) {
                continue;
            }
            let error = unknown_rule_error(
                self.registry(),
                rule,
                at.line,
                format!("Unknown rule '{}' in '{}'", rule, key),
                DiagnosticCode::UnknownRule,
                true,
            );
            return Some(error.with_column(at.value_column));
        }
        None
    }
}

/// Look `key` up in the table at `path`.
fn lookup<'t>(tree: &'t toml::Table, path: &[String], key: &str) -> Option<&'t toml::Value> {
    let mut table = tree;
    for segment in path {
        table = table.get(segment)?.as_table()?;
    }
    table.get(key)
}

/// Build an unknown-rule finding, appending a suggestion when one exists.
fn unknown_rule_error(
    registry: &SchemaRegistry,
    rule: &str,
    line: usize,
    message: String,
    code: DiagnosticCode,
    advisory: bool,
) -> ValidationError {
    let suggestions = rule_suggestions(registry, rule);
    let message = match suggestions.first() {
        Some(correct) => format!("{}. Did you mean '{}'?", message, correct),
        None => message,
    };

    let error = if advisory {
        ValidationError::warning(code, line, message)
    } else {
        ValidationError::error(code, line, message)
    };

    match suggestions.split_first() {
        Some((correct, alternatives)) => error.with_kind(ErrorKind::UnknownRuleSuggestion {
            wrong: rule.to_string(),
            correct: correct.to_string(),
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        }),
        None => error,
    }
}

fn unknown_key(key: &str, section: &str, valid: &[String], at: Position) -> ValidationError {
    ValidationError::warning(
        DiagnosticCode::UnknownKey,
        at.line,
        format!(
            "Unknown key '{}' in [{}] section. Valid keys: {}",
            key,
            section,
            valid.join(", ")
        ),
    )
    .with_column(at.key_column)
}

fn invalid_value(message: String, at: Position) -> ValidationError {
    ValidationError::error(DiagnosticCode::InvalidValue, at.line, message).with_column(at.value_column)
}
