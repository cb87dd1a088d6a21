//! Resolved configuration values and typed validation.
//!
//! Values come from the parsed TOML tree when it is available, and from the
//! literal text of the line otherwise. Both are normalised into a
//! [`ConfigValue`] so the checks below only handle one shape.

use super::diagnostic::ErrorKind;
use super::scan::{strip_comment, unquote};
use crate::schema::{PropertySchema, PropertyType};

/// A configuration value, independent of where it was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A string.
    String(String),
    /// An array. Elements of multi-line literal arrays are not visible and
    /// come out empty.
    Array(Vec<ConfigValue>),
    /// Anything else (tables, datetimes, unrecognised literals), described
    /// by a short type name.
    Other(String),
}

impl ConfigValue {
    /// Convert a value from the parsed tree.
    pub fn from_toml(value: &toml::Value) -> Self {
        match value {
            toml::Value::Integer(i) => Self::Integer(*i),
            toml::Value::Float(f) => Self::Float(*f),
            toml::Value::Boolean(b) => Self::Boolean(*b),
            toml::Value::String(s) => Self::String(s.clone()),
            toml::Value::Array(items) => Self::Array(items.iter().map(Self::from_toml).collect()),
            other => Self::Other(other.type_str().to_string()),
        }
    }

    /// Interpret the literal text of a value.
    ///
    /// Handles quoted strings, `true`/`false`, integers, floats and
    /// bracket-delimited arrays whose elements sit on the same line.
    pub fn from_literal(text: &str) -> Self {
        let text = strip_comment(text).trim();

        if text.starts_with('[') {
            if !text.ends_with(']') {
                return Self::Array(Vec::new());
            }
            let inner = text[1..text.len() - 1].trim();
            let items = split_array_items(inner)
                .into_iter()
                .map(Self::from_literal)
                .collect();
            return Self::Array(items);
        }

        match text {
            "true" => return Self::Boolean(true),
            "false" => return Self::Boolean(false),
            _ => {}
        }

        if (text.starts_with('"') || text.starts_with('\'')) && text.len() >= 2 {
            let stripped = unquote(text);
            if stripped.len() + 2 == text.len() {
                return Self::String(stripped.to_string());
            }
        }

        let digits = text.replace('_', "");
        if let Ok(i) = digits.parse::<i64>() {
            return Self::Integer(i);
        }
        if let Ok(f) = digits.parse::<f64>() {
            return Self::Float(f);
        }

        Self::Other(text.to_string())
    }

    /// Short type name for messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Other(name) => name,
        }
    }

    /// The integer this value denotes, if any.
    ///
    /// Floats with no fractional part count as integers.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// The string this value holds, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of an array value, if any.
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Split the inside of a single-line array on top-level commas.
fn split_array_items(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '[' | '{' => depth += 1,
                ']' | '}' => depth -= 1,
                ',' if depth == 0 => {
                    items.push(inner[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    items.push(inner[start..].trim());

    items.into_iter().filter(|item| !item.is_empty()).collect()
}

/// Validate a value against a property schema.
///
/// Returns the first failure as a message (prefixed with `label`) together
/// with its fix discriminant.
pub fn check_property(
    label: &str,
    schema: &PropertySchema,
    value: &ConfigValue,
) -> Option<(String, ErrorKind)> {
    match schema.kind {
        PropertyType::Number => {
            let Some(number) = value.as_integer() else {
                return Some((format!("{} must be a number", label), ErrorKind::Generic));
            };
            if let Some(minimum) = schema.minimum {
                if number < minimum {
                    return Some((
                        format!("{} must be at least {}", label, minimum),
                        ErrorKind::Generic,
                    ));
                }
            }
            if let Some(maximum) = schema.maximum {
                if number > maximum {
                    return Some((
                        format!("{} must be at most {}", label, maximum),
                        ErrorKind::Generic,
                    ));
                }
            }
            None
        }
        PropertyType::Boolean => match value {
            ConfigValue::Boolean(_) => None,
            _ => Some((
                format!("{} must be true or false", label),
                ErrorKind::BooleanExpected,
            )),
        },
        PropertyType::String => {
            let Some(text) = value.as_str() else {
                return Some((format!("{} must be a string", label), ErrorKind::Generic));
            };
            match &schema.enum_values {
                Some(allowed) if !allowed.iter().any(|a| a == text) => {
                    let quoted: Vec<String> =
                        allowed.iter().map(|a| format!("\"{}\"", a)).collect();
                    Some((
                        format!("{} must be one of: {}", label, quoted.join(", ")),
                        ErrorKind::Generic,
                    ))
                }
                _ => None,
            }
        }
        PropertyType::Array => match value {
            ConfigValue::Array(_) => None,
            _ => Some((format!("{} must be an array", label), ErrorKind::Generic)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(min: Option<i64>, max: Option<i64>) -> PropertySchema {
        PropertySchema::new(PropertyType::Number).with_range(min, max)
    }

    fn message(result: Option<(String, ErrorKind)>) -> String {
        result.map(|(m, _)| m).unwrap_or_default()
    }

    #[test]
    fn literal_scalars() {
        assert_eq!(ConfigValue::from_literal("80"), ConfigValue::Integer(80));
        assert_eq!(ConfigValue::from_literal("1_000"), ConfigValue::Integer(1000));
        assert_eq!(ConfigValue::from_literal("2.5"), ConfigValue::Float(2.5));
        assert_eq!(ConfigValue::from_literal("true"), ConfigValue::Boolean(true));
        assert_eq!(
            ConfigValue::from_literal(r#""atx" # style"#),
            ConfigValue::String("atx".into())
        );
        assert_eq!(ConfigValue::from_literal("'raw'"), ConfigValue::String("raw".into()));
        assert_eq!(ConfigValue::from_literal("maybe"), ConfigValue::Other("maybe".into()));
    }

    #[test]
    fn literal_arrays() {
        assert_eq!(
            ConfigValue::from_literal(r#"["MD001", "MD002"]"#),
            ConfigValue::Array(vec![
                ConfigValue::String("MD001".into()),
                ConfigValue::String("MD002".into()),
            ])
        );
        assert_eq!(ConfigValue::from_literal("[]"), ConfigValue::Array(vec![]));
        assert_eq!(ConfigValue::from_literal("["), ConfigValue::Array(vec![]));
        assert_eq!(
            ConfigValue::from_literal(r#"["a,b", 1]"#),
            ConfigValue::Array(vec![
                ConfigValue::String("a,b".into()),
                ConfigValue::Integer(1),
            ])
        );
    }

    #[test]
    fn from_toml_value() {
        let table: toml::Table = "a = 3\nb = [\"x\"]\nc = { d = 1 }".parse().unwrap();

        assert_eq!(ConfigValue::from_toml(&table["a"]), ConfigValue::Integer(3));
        assert_eq!(
            ConfigValue::from_toml(&table["b"]),
            ConfigValue::Array(vec![ConfigValue::String("x".into())])
        );
        assert_eq!(ConfigValue::from_toml(&table["c"]).type_name(), "table");
    }

    #[test]
    fn number_checks() {
        let schema = number(Some(1), Some(6));

        assert!(check_property("'level'", &schema, &ConfigValue::Integer(3)).is_none());
        assert!(check_property("'level'", &schema, &ConfigValue::Float(3.0)).is_none());
        assert_eq!(
            message(check_property("'level'", &schema, &ConfigValue::String("abc".into()))),
            "'level' must be a number"
        );
        assert_eq!(
            message(check_property("'level'", &schema, &ConfigValue::Float(2.5))),
            "'level' must be a number"
        );
        assert_eq!(
            message(check_property("'level'", &schema, &ConfigValue::Integer(0))),
            "'level' must be at least 1"
        );
        assert_eq!(
            message(check_property("'level'", &schema, &ConfigValue::Integer(7))),
            "'level' must be at most 6"
        );
    }

    #[test]
    fn boolean_check_sets_kind() {
        let schema = PropertySchema::new(PropertyType::Boolean);
        let (msg, kind) =
            check_property("'strict'", &schema, &ConfigValue::Other("maybe".into())).unwrap();

        assert_eq!(msg, "'strict' must be true or false");
        assert_eq!(kind, ErrorKind::BooleanExpected);
        assert!(check_property("'strict'", &schema, &ConfigValue::Boolean(false)).is_none());
    }

    #[test]
    fn string_enum_check() {
        let schema = PropertySchema::new(PropertyType::String).with_enum(["atx", "setext"]);

        assert!(check_property("'style'", &schema, &ConfigValue::String("atx".into())).is_none());
        assert_eq!(
            message(check_property("'style'", &schema, &ConfigValue::String("dash".into()))),
            r#"'style' must be one of: "atx", "setext""#
        );
        assert_eq!(
            message(check_property("'style'", &schema, &ConfigValue::Integer(1))),
            "'style' must be a string"
        );
    }

    #[test]
    fn array_check() {
        let schema = PropertySchema::new(PropertyType::Array);

        assert!(check_property("'names'", &schema, &ConfigValue::Array(vec![])).is_none());
        assert_eq!(
            message(check_property("'names'", &schema, &ConfigValue::String("x".into()))),
            "'names' must be an array"
        );
    }
}
