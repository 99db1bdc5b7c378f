//! Type universe for generated members.
//!
//! This module defines [`FieldType`], the complete set of member types the
//! generator understands, and [`TypeCategory`], the dispatch key computed
//! once per schema node.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Member type representation for the fixture-forge schema.
///
/// Leaf types carry no structure of their own; container types embed their
/// element types; `Object` refers to a named type in the
/// [`SchemaRegistry`](crate::SchemaRegistry).
///
/// # YAML Format
///
/// Simple types can be specified as strings:
/// ```yaml
/// type: uuid
/// type: int
/// type: text
/// ```
///
/// Complex types use object format:
/// ```yaml
/// type:
///   type: array
///   element_type: int
/// type:
///   type: object
///   type_name: address
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Boolean value
    Bool,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    BigInt,

    /// 64-bit IEEE 754 floating point
    Float,

    /// Unlimited text
    Text,

    /// UUID (128-bit)
    Uuid,

    /// Timestamp with timezone
    DateTime,

    /// Domain-flavored string produced by an external provider
    Domain {
        /// Provider marker (e.g. "email", "phone_number")
        provider: String,
    },

    /// Fixed-layout array of a specific element type
    Array {
        /// Element type
        element_type: Box<FieldType>,
    },

    /// Order-preserving growable sequence
    List {
        /// Element type
        element_type: Box<FieldType>,
    },

    /// Key/value map
    Map {
        /// Key type
        key_type: Box<FieldType>,
        /// Value type
        value_type: Box<FieldType>,
    },

    /// Named object type resolved through the schema registry
    Object {
        /// Registered type name
        type_name: String,
    },
}

/// Dispatch category of a field type.
///
/// Computed once per [`Definition`](crate::Definition) so the dispatcher
/// selects a synthesizer by category instead of re-matching type sets on
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Scalar leaf values (bool, int, big_int, float, text, uuid)
    Primitive,
    /// Date/time values
    Temporal,
    /// Domain-flavored strings
    Domain,
    /// Fixed arrays
    Array,
    /// Order-preserving sequences
    Collection,
    /// Key/value maps
    Map,
    /// Named object types
    Object,
}

impl FieldType {
    /// Compute the dispatch category of this type.
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Bool | Self::Int | Self::BigInt | Self::Float | Self::Text | Self::Uuid => {
                TypeCategory::Primitive
            }
            Self::DateTime => TypeCategory::Temporal,
            Self::Domain { .. } => TypeCategory::Domain,
            Self::Array { .. } => TypeCategory::Array,
            Self::List { .. } => TypeCategory::Collection,
            Self::Map { .. } => TypeCategory::Map,
            Self::Object { .. } => TypeCategory::Object,
        }
    }

    /// Whether this type is a structureless leaf.
    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Self::Array { .. } | Self::List { .. } | Self::Map { .. } | Self::Object { .. }
        )
    }

    /// Create an array type.
    pub fn array(element_type: FieldType) -> Self {
        Self::Array {
            element_type: Box::new(element_type),
        }
    }

    /// Create a list type.
    pub fn list(element_type: FieldType) -> Self {
        Self::List {
            element_type: Box::new(element_type),
        }
    }

    /// Create a map type.
    pub fn map(key_type: FieldType, value_type: FieldType) -> Self {
        Self::Map {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }

    /// Create an object type reference.
    pub fn object(type_name: impl Into<String>) -> Self {
        Self::Object {
            type_name: type_name.into(),
        }
    }

    /// Create a domain type reference.
    pub fn domain(provider: impl Into<String>) -> Self {
        Self::Domain {
            provider: provider.into(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::BigInt => write!(f, "big_int"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
            Self::Uuid => write!(f, "uuid"),
            Self::DateTime => write!(f, "date_time"),
            Self::Domain { provider } => write!(f, "domain<{provider}>"),
            Self::Array { element_type } => write!(f, "array<{element_type}>"),
            Self::List { element_type } => write!(f, "list<{element_type}>"),
            Self::Map {
                key_type,
                value_type,
            } => write!(f, "map<{key_type}, {value_type}>"),
            Self::Object { type_name } => write!(f, "object<{type_name}>"),
        }
    }
}

// Custom serialization/deserialization for FieldType
// Supports both simple string format ("uuid", "int") and object format
// ({"type": "array", "element_type": "int"})

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            // Simple types - serialize as string
            Self::Bool => serializer.serialize_str("bool"),
            Self::Int => serializer.serialize_str("int"),
            Self::BigInt => serializer.serialize_str("big_int"),
            Self::Float => serializer.serialize_str("float"),
            Self::Text => serializer.serialize_str("text"),
            Self::Uuid => serializer.serialize_str("uuid"),
            Self::DateTime => serializer.serialize_str("date_time"),

            // Complex types - serialize as map
            Self::Domain { provider } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "domain")?;
                map.serialize_entry("provider", provider)?;
                map.end()
            }
            Self::Array { element_type } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("element_type", element_type)?;
                map.end()
            }
            Self::List { element_type } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "list")?;
                map.serialize_entry("element_type", element_type)?;
                map.end()
            }
            Self::Map {
                key_type,
                value_type,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("key_type", key_type)?;
                map.serialize_entry("value_type", value_type)?;
                map.end()
            }
            Self::Object { type_name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "object")?;
                map.serialize_entry("type_name", type_name)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct FieldTypeVisitor;

        fn simple_type<E: Error>(value: &str) -> Result<FieldType, E> {
            match value {
                "bool" => Ok(FieldType::Bool),
                "int" => Ok(FieldType::Int),
                "big_int" | "bigint" => Ok(FieldType::BigInt),
                "float" | "double" => Ok(FieldType::Float),
                "text" => Ok(FieldType::Text),
                "uuid" => Ok(FieldType::Uuid),
                "date_time" | "datetime" => Ok(FieldType::DateTime),
                _ => Err(E::custom(format!("unknown simple type: {value}"))),
            }
        }

        impl<'de> Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a FieldType")
            }

            // Handle string format: "uuid", "int", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_type(value)
            }

            // Handle map format: {"type": "array", "element_type": "int"}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "domain" => {
                        let provider = get_field_required(&fields, "provider")?;
                        Ok(FieldType::Domain { provider })
                    }
                    "array" => {
                        let element_type: FieldType = get_field_required(&fields, "element_type")?;
                        Ok(FieldType::Array {
                            element_type: Box::new(element_type),
                        })
                    }
                    "list" => {
                        let element_type: FieldType = get_field_required(&fields, "element_type")?;
                        Ok(FieldType::List {
                            element_type: Box::new(element_type),
                        })
                    }
                    "map" => {
                        let key_type: FieldType = get_field_required(&fields, "key_type")?;
                        let value_type: FieldType = get_field_required(&fields, "value_type")?;
                        Ok(FieldType::Map {
                            key_type: Box::new(key_type),
                            value_type: Box::new(value_type),
                        })
                    }
                    "object" => {
                        let type_name = get_field_required(&fields, "type_name")?;
                        Ok(FieldType::Object { type_name })
                    }
                    // Simple types that might appear in map format
                    other => simple_type(other),
                }
            }
        }

        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

// Helper for deserialization
fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
