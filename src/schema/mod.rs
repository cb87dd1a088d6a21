//! Rule schema registry.
//!
//! Static data describing what a configuration file may contain:
//!
//! - [`SchemaRegistry`] - Rule identifiers and the keys each section accepts
//! - [`RuleSchema`] - Configurable properties of a single rule
//! - [`PropertySchema`] - Type, bounds and enum of a single property
//!
//! # Example
//!
//! ```
//! use rumdl_config::schema::{PropertySchema, PropertyType, RuleSchema, SchemaRegistry};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     "MD013",
//!     RuleSchema::new("Line length").with_property(
//!         "line_length",
//!         PropertySchema::new(PropertyType::Number).with_range(Some(1), None),
//!     ),
//! );
//!
//! assert!(registry.contains("md013"));
//! ```

pub mod property;
pub mod registry;

pub use property::{PropertySchema, PropertyType};
pub use registry::{RuleSchema, SchemaRegistry, DEFAULT_TOOL};
