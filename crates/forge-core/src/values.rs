//! Generated value tree.
//!
//! [`Value`] is the in-memory instance produced by the generation engine.
//! Object members and map entries preserve insertion order so generated
//! instances compare structurally in tests.

use crate::types::FieldType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int(i32),

    /// 64-bit signed integer
    BigInt(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// Date/time with timezone
    DateTime(DateTime<Utc>),

    /// Array or collection of values
    Array(Vec<Value>),

    /// Map entries, insertion-ordered, keys unique by equality
    Map(Vec<(Value, Value)>),

    /// Generated object instance
    Object {
        /// Registered type name
        type_name: String,
        /// Member values, insertion-ordered
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// The canonical zero/empty representation of a field type.
    pub fn zero_of(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Bool => Self::Bool(false),
            FieldType::Int => Self::Int(0),
            FieldType::BigInt => Self::BigInt(0),
            FieldType::Float => Self::Float(0.0),
            FieldType::Text | FieldType::Domain { .. } => Self::Text(String::new()),
            FieldType::Uuid => Self::Uuid(Uuid::nil()),
            FieldType::DateTime => Self::DateTime(DateTime::<Utc>::UNIX_EPOCH),
            FieldType::Array { .. } | FieldType::List { .. } => Self::Array(Vec::new()),
            FieldType::Map { .. } => Self::Map(Vec::new()),
            FieldType::Object { type_name } => Self::Object {
                type_name: type_name.clone(),
                fields: Vec::new(),
            },
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::BigInt(i) => Some(*i),
            Self::Int(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array slice.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as map entries.
    pub fn as_entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object member by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object { fields, .. } => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Number of elements, entries, members, or characters in this value.
    ///
    /// Returns `None` for values without a size notion.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Array(arr) => Some(arr.len()),
            Self::Map(entries) => Some(entries.len()),
            Self::Object { fields, .. } => Some(fields.len()),
            _ => None,
        }
    }

    /// Whether this value is sized and empty.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Convert to a `serde_json::Value` for assertions and debugging.
    ///
    /// Map keys are rendered to strings; UUIDs and timestamps use their
    /// canonical text forms.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => json!(b),
            Self::Int(i) => json!(i),
            Self::BigInt(i) => json!(i),
            Self::Float(f) => json!(f),
            Self::Text(s) => json!(s),
            Self::Uuid(u) => json!(u.to_string()),
            Self::DateTime(dt) => json!(dt.to_rfc3339()),
            Self::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(Value::to_json).collect())
            }
            Self::Map(entries) => {
                let map = entries
                    .iter()
                    .map(|(k, v)| (k.key_string(), v.to_json()))
                    .collect();
                serde_json::Value::Object(map)
            }
            Self::Object { fields, .. } => {
                let map = fields
                    .iter()
                    .map(|(n, v)| (n.clone(), v.to_json()))
                    .collect();
                serde_json::Value::Object(map)
            }
        }
    }

    // Plain text rendering of a map key for JSON conversion.
    fn key_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Uuid(u) => u.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339(),
            other => other.to_json().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_i32(), Some(42));
        assert_eq!(Value::BigInt(100).as_i64(), Some(100));
        assert_eq!(Value::Float(3.15).as_f64(), Some(3.15));
        assert_eq!(Value::Text("test".to_string()).as_str(), Some("test"));

        // Cross-type conversions
        assert_eq!(Value::Int(42).as_i64(), Some(42));
        assert_eq!(Value::Bool(true).as_i32(), None);
    }

    #[test]
    fn test_zero_of() {
        assert_eq!(Value::zero_of(&FieldType::Bool), Value::Bool(false));
        assert_eq!(Value::zero_of(&FieldType::Int), Value::Int(0));
        assert_eq!(
            Value::zero_of(&FieldType::Text),
            Value::Text(String::new())
        );
        assert_eq!(Value::zero_of(&FieldType::Uuid), Value::Uuid(Uuid::nil()));
        assert_eq!(
            Value::zero_of(&FieldType::array(FieldType::Int)),
            Value::Array(vec![])
        );
        assert_eq!(
            Value::zero_of(&FieldType::object("user")),
            Value::Object {
                type_name: "user".to_string(),
                fields: vec![]
            }
        );
    }

    #[test]
    fn test_field_lookup() {
        let obj = Value::Object {
            type_name: "user".to_string(),
            fields: vec![
                ("name".to_string(), Value::Text("Alice".to_string())),
                ("age".to_string(), Value::Int(30)),
            ],
        };

        assert_eq!(obj.field("age"), Some(&Value::Int(30)));
        assert_eq!(obj.field("missing"), None);
        assert_eq!(obj.len(), Some(2));
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::Text("abc".to_string()).len(), Some(3));
        assert_eq!(Value::Array(vec![Value::Null]).len(), Some(1));
        assert_eq!(Value::Int(1).len(), None);
    }

    #[test]
    fn test_to_json() {
        let obj = Value::Object {
            type_name: "user".to_string(),
            fields: vec![
                ("active".to_string(), Value::Bool(true)),
                ("scores".to_string(), Value::Array(vec![Value::Int(1)])),
            ],
        };

        let json = obj.to_json();
        assert_eq!(json["active"], serde_json::json!(true));
        assert_eq!(json["scores"][0], serde_json::json!(1));
    }
}
