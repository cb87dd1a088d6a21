//! Section taxonomy.
//!
//! Every `[header]` in a configuration document is classified into a
//! [`Section`], which decides how the keys below it are validated.
//!
//! | Header                                   | Section            |
//! |------------------------------------------|--------------------|
//! | `[global]`, `[tool.<tool>]`              | `Global`           |
//! | `[files]`                                | `Files`            |
//! | `[rules]`                                | `Rules`            |
//! | `[rules.<RULE>]`, `[<RULE>]`, `[tool.<tool>.<RULE>]` | `Rule`  |
//! | `[per-file-ignores]`, `[tool.<tool>.per-file-ignores]` | `PerFileIgnores` |

use std::path::Path;
use std::str::FromStr;

use super::scan::split_dotted;
use crate::schema::SchemaRegistry;

/// The role a configuration document plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// A dedicated config file such as `.rumdl.toml`.
    #[default]
    Standalone,
    /// A foreign project-metadata file such as `pyproject.toml`, where only
    /// `[tool.<tool>]` tables belong to the linter.
    ProjectMetadata,
}

impl DocumentKind {
    /// Derive the document kind from a file name.
    pub fn from_path(path: &Path) -> Self {
        match path.file_name().and_then(|name| name.to_str()) {
            Some("pyproject.toml") => Self::ProjectMetadata,
            _ => Self::Standalone,
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standalone" => Ok(Self::Standalone),
            "project" | "pyproject" => Ok(Self::ProjectMetadata),
            _ => Err(format!("unknown document kind: {}", s)),
        }
    }
}

/// Validation context opened by a section header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first header.
    #[default]
    Top,
    /// `[global]` and its `[tool.<tool>]` alias.
    Global,
    /// `[files]`.
    Files,
    /// `[rules]`.
    Rules,
    /// A section for a registered rule, holding its canonical id.
    Rule(String),
    /// A rule section whose id is not registered.
    UnknownRule(String),
    /// `[per-file-ignores]`.
    PerFileIgnores,
    /// A header outside the taxonomy.
    Unknown,
    /// A table that belongs to another tool in a project-metadata file.
    Foreign,
}

/// Classify a header name.
pub fn classify_section(name: &str, registry: &SchemaRegistry, kind: DocumentKind) -> Section {
    let segments = split_dotted(name);
    let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

    if parts.first() == Some(&"tool") {
        if parts.get(1) != Some(&registry.tool.as_str()) {
            return match kind {
                DocumentKind::ProjectMetadata => Section::Foreign,
                DocumentKind::Standalone => Section::Unknown,
            };
        }
        return match &parts[2..] {
            [] => Section::Global,
            ["per-file-ignores"] => Section::PerFileIgnores,
            [rule] => rule_section(rule, registry, false),
            _ => Section::Unknown,
        };
    }

    if kind == DocumentKind::ProjectMetadata {
        return Section::Foreign;
    }

    match parts.as_slice() {
        ["global"] => Section::Global,
        ["files"] => Section::Files,
        ["rules"] => Section::Rules,
        ["per-file-ignores"] => Section::PerFileIgnores,
        ["rules", rule] => rule_section(rule, registry, true),
        [rule] => rule_section(rule, registry, false),
        _ => Section::Unknown,
    }
}

/// Section for a name in rule position.
///
/// `explicit` is set for `[rules.<name>]`, where any name is a rule id; bare
/// names only count as rule ids when registered or shaped like one.
fn rule_section(name: &str, registry: &SchemaRegistry, explicit: bool) -> Section {
    if let Some((id, _)) = registry.get(name) {
        return Section::Rule(id.to_string());
    }
    if explicit || looks_like_rule_id(name) {
        return Section::UnknownRule(name.to_string());
    }
    Section::Unknown
}

/// Letters followed by digits, e.g. `MD013`.
pub fn looks_like_rule_id(name: &str) -> bool {
    let letters = name.chars().take_while(char::is_ascii_alphabetic).count();
    let rest = &name[letters..];
    letters > 0 && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}

/// Human-readable list of the section forms a document may use.
pub fn valid_section_forms(tool: &str) -> String {
    [
        "[global]".to_string(),
        "[files]".to_string(),
        "[rules]".to_string(),
        "[rules.<RULE>]".to_string(),
        "[<RULE>]".to_string(),
        "[per-file-ignores]".to_string(),
        format!("[tool.{}]", tool),
        format!("[tool.{}.<RULE>]", tool),
        format!("[tool.{}.per-file-ignores]", tool),
    ]
    .join(", ")
}
