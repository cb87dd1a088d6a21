//! Rule schema registry.
//!
//! The [`SchemaRegistry`] maps rule identifiers to their configurable
//! properties and records which keys the `[global]`, `[files]` and `[rules]`
//! sections accept. It is generated from the linter's own schema output and
//! shipped as JSON; the validator only ever reads it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::property::PropertySchema;
use crate::error::{ConfigError, Result};

/// Registry JSON embedded at build time.
const BUILTIN_REGISTRY: &str = include_str!("registry.json");

/// Tool namespace used when a registry does not name one.
pub const DEFAULT_TOOL: &str = "rumdl";

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_files_keys() -> Vec<String> {
    vec!["include".to_string(), "exclude".to_string()]
}

fn default_rules_keys() -> Vec<String> {
    vec!["select".to_string(), "ignore".to_string()]
}

/// Schema of one lint rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSchema {
    /// What the rule checks.
    #[serde(default)]
    pub description: String,
    /// Configurable properties, keyed by name.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
}

impl RuleSchema {
    /// Create a rule schema without properties.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a configurable property.
    pub fn with_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Names of all configurable properties, sorted.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }
}

/// Immutable registry of rule schemas and section keys.
///
/// Rules are kept sorted by identifier; that order is the registry order
/// used wherever candidates are enumerated. Unknown JSON fields are ignored
/// so newer registry files load without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    /// Version of the linter the registry was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Tool namespace for `[tool.<tool>]` tables.
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Valid `[global]` keys and their schemas.
    #[serde(default)]
    pub global: BTreeMap<String, PropertySchema>,
    /// Valid `[files]` keys.
    #[serde(default = "default_files_keys")]
    pub files_keys: Vec<String>,
    /// Valid `[rules]` keys.
    #[serde(default = "default_rules_keys")]
    pub rules_keys: Vec<String>,
    #[serde(default)]
    rules: BTreeMap<String, RuleSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry for the default tool namespace.
    pub fn new() -> Self {
        Self {
            version: None,
            tool: default_tool(),
            global: BTreeMap::new(),
            files_keys: default_files_keys(),
            rules_keys: default_rules_keys(),
            rules: BTreeMap::new(),
        }
    }

    /// Load the registry embedded in this build.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_REGISTRY).map_err(|e| ConfigError::InvalidRegistry {
            message: e.to_string(),
        })
    }

    /// Parse a registry from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidRegistry {
            message: e.to_string(),
        })
    }

    /// Load a registry from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::RegistryLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let registry: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::RegistryLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if registry.rules.is_empty() {
            tracing::warn!("Schema registry {} defines no rules", path.display());
        }

        tracing::debug!(
            "Loaded schema registry from {} ({} rules)",
            path.display(),
            registry.len()
        );

        Ok(registry)
    }

    /// Register a rule schema, replacing any existing one with the same id.
    pub fn register(&mut self, id: impl Into<String>, schema: RuleSchema) {
        self.rules.insert(id.into(), schema);
    }

    /// Look a rule up by identifier, ignoring case.
    ///
    /// Returns the canonical identifier together with its schema.
    pub fn get(&self, id: &str) -> Option<(&str, &RuleSchema)> {
        if let Some((key, schema)) = self.rules.get_key_value(id) {
            return Some((key.as_str(), schema));
        }
        self.rules
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(key, schema)| (key.as_str(), schema))
    }

    /// Check whether a rule identifier is registered, ignoring case.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over rule identifiers in registry order.
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate over all rules in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSchema)> {
        self.rules.iter().map(|(id, schema)| (id.as_str(), schema))
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
