//! Named type registry loaded from YAML.
//!
//! A [`SchemaRegistry`] holds the object types the generator can build:
//! each [`TypeDef`] names its structural members, their types, and the
//! constraint declarations attached to them. The registry is the
//! configuration surface of the generator and is immutable once
//! generation starts.

use crate::constraint::Constraint;
use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading a schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Type not found in the registry
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    /// Field not found in a type
    #[error("Field '{field}' not found in type '{type_name}'")]
    FieldNotFound {
        /// Owning type name
        type_name: String,
        /// Missing field name
        field: String,
    },
}

/// A structural member of a named type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Member name
    pub name: String,

    /// Member type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Constraint declarations attached to this member
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,

    /// Compile-time member (the static/final analog); excluded from
    /// generation
    #[serde(default)]
    pub constant: bool,
}

impl FieldDef {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            constraints: Vec::new(),
            constant: false,
        }
    }

    /// Attach a constraint declaration.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A named object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name
    pub name: String,

    /// Structural members
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    /// Create a new type definition.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Members eligible for generation (constants excluded).
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.constant)
    }
}

fn default_version() -> u32 {
    1
}

/// Registry of named object types.
///
/// Loaded from a YAML document and read-only thereafter; the source of
/// truth for what the generator can construct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaRegistry {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Type definitions
    pub types: Vec<TypeDef>,

    /// Cached type lookup (not serialized)
    #[serde(skip)]
    type_map: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a registry from a list of type definitions.
    pub fn new(types: Vec<TypeDef>) -> Self {
        let mut registry = Self {
            version: default_version(),
            types,
            type_map: HashMap::new(),
        };
        registry.build_type_map();
        registry
    }

    /// Load a registry from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a registry from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut registry: SchemaRegistry = serde_yaml::from_str(yaml)?;
        registry.build_type_map();
        Ok(registry)
    }

    /// Build the internal type lookup map.
    fn build_type_map(&mut self) {
        self.type_map = self
            .types
            .iter()
            .enumerate()
            .map(|(idx, type_def)| (type_def.name.clone(), idx))
            .collect();
    }

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map
            .get(name)
            .and_then(|&idx| self.types.get(idx))
    }

    /// Get a type definition by name, or a `TypeNotFound` error.
    pub fn require_type(&self, name: &str) -> Result<&TypeDef, SchemaError> {
        self.get_type(name)
            .ok_or_else(|| SchemaError::TypeNotFound(name.to_string()))
    }

    /// Get the type of a field in a named type.
    pub fn get_field_type(&self, type_name: &str, field: &str) -> Result<&FieldType, SchemaError> {
        self.require_type(type_name)?
            .get_field(field)
            .map(|f| &f.field_type)
            .ok_or_else(|| SchemaError::FieldNotFound {
                type_name: type_name.to_string(),
                field: field.to_string(),
            })
    }

    /// All registered type names.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Add a type to the registry.
    pub fn add_type(&mut self, type_def: TypeDef) {
        let idx = self.types.len();
        self.type_map.insert(type_def.name.clone(), idx);
        self.types.push(type_def);
    }
}
