//! Property schemas.
//!
//! A [`PropertySchema`] describes the shape of one configurable value: its
//! [`PropertyType`], inclusive numeric bounds and permitted string values.

use serde::{Deserialize, Serialize};

/// The value type a configuration property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// An integer.
    Number,
    /// `true` or `false`.
    Boolean,
    /// A string, optionally restricted to an enum.
    String,
    /// An array of values.
    Array,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Number => write!(f, "number"),
            PropertyType::Boolean => write!(f, "boolean"),
            PropertyType::String => write!(f, "string"),
            PropertyType::Array => write!(f, "array"),
        }
    }
}

/// Schema of a single configuration property.
///
/// `minimum`/`maximum` are only consulted for [`PropertyType::Number`] and
/// `enum_values` only for [`PropertyType::String`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Accepted value type.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    /// Permitted string values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    /// Create a schema of the given type with no constraints.
    pub fn new(kind: PropertyType) -> Self {
        Self {
            kind,
            minimum: None,
            maximum: None,
            enum_values: None,
            description: None,
        }
    }

    /// Set inclusive numeric bounds.
    pub fn with_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Restrict a string property to the given values.
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Short summary used in listings, e.g. `number (1..=6)`.
    pub fn summary(&self) -> String {
        match (self.kind, &self.enum_values) {
            (PropertyType::String, Some(values)) => format!("string ({})", values.join(" | ")),
            (PropertyType::Number, _) => match (self.minimum, self.maximum) {
                (Some(min), Some(max)) => format!("number ({}..={})", min, max),
                (Some(min), None) => format!("number (>= {})", min),
                (None, Some(max)) => format!("number (<= {})", max),
                (None, None) => "number".to_string(),
            },
            (kind, _) => kind.to_string(),
        }
    }
}
