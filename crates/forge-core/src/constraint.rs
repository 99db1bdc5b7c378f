//! Declarative validation constraints attached to schema members.
//!
//! A [`Constraint`] expresses a validity rule the generation engine can
//! satisfy or violate on demand. [`ConstraintKind`] is the match key the
//! processor chain uses to decide which processor owns a declaration.

use crate::values::Value;
use serde::{Deserialize, Serialize};

/// A constraint declaration on a schema member.
///
/// # YAML Format
///
/// ```yaml
/// constraints:
///   - type: range
///     min: 1
///     max: 10
///   - type: not_null
///   - type: size
///     min: 1
///     max: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Integer value must lie within `[min, max]`
    Range {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Sized value (text, array, list, map) must have a length in `[min, max]`
    Size {
        /// Minimum length
        #[serde(default)]
        min: usize,
        /// Maximum length
        max: usize,
    },

    /// Value must be present (and, for text, non-empty)
    NotNull,

    /// Value must be absent
    Null,

    /// Boolean value must be true
    AssertTrue,

    /// Boolean value must be false
    AssertFalse,
}

/// Match key for constraint processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Numeric range bound
    Range,
    /// Length bound
    Size,
    /// Required presence
    NotNull,
    /// Forbidden presence
    Null,
    /// Fixed truth value (true)
    AssertTrue,
    /// Fixed truth value (false)
    AssertFalse,
}

impl Constraint {
    /// The kind of this declaration.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::Range { .. } => ConstraintKind::Range,
            Self::Size { .. } => ConstraintKind::Size,
            Self::NotNull => ConstraintKind::NotNull,
            Self::Null => ConstraintKind::Null,
            Self::AssertTrue => ConstraintKind::AssertTrue,
            Self::AssertFalse => ConstraintKind::AssertFalse,
        }
    }

    /// Re-evaluate this declaration against a generated value.
    ///
    /// Used by tests and by violation logic to check its work; the engine
    /// itself never reports violations.
    pub fn holds_for(&self, value: &Value) -> bool {
        match self {
            Self::Range { min, max } => value
                .as_i64()
                .map(|v| (*min..=*max).contains(&v))
                .unwrap_or(false),
            Self::Size { min, max } => value
                .len()
                .map(|len| (*min..=*max).contains(&len))
                .unwrap_or(false),
            Self::NotNull => !value.is_null(),
            Self::Null => value.is_null(),
            Self::AssertTrue => value.as_bool() == Some(true),
            Self::AssertFalse => value.as_bool() == Some(false),
        }
    }
}
