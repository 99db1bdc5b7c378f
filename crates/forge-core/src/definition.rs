//! Parsed schema nodes and the definition parser.
//!
//! A [`Definition`] captures everything the dispatcher needs to know about
//! one schema node: the subject type, its dispatch category, the owning
//! member (absent for the root and for container elements), the attached
//! constraint declarations, and — for object nodes — child Definitions.
//!
//! [`DefinitionParser::parse`] pre-builds two tiers of members; deeper
//! object nesting is resolved lazily at dispatch time through
//! [`DefinitionParser::expand`], served from a request-local memoized arena
//! keyed by type name. The arena caps parser recursion, so self-referential
//! types cannot loop here; generation-time recursion is bounded separately
//! by the engine's depth guard.

use crate::constraint::{Constraint, ConstraintKind};
use crate::schema::{FieldDef, SchemaError, SchemaRegistry};
use crate::types::{FieldType, TypeCategory};
use std::collections::HashMap;

/// A parsed schema node.
///
/// Built per generation request and immutable thereafter. Invariant: leaf
/// categories never have children; object nodes may have empty children
/// until expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Subject type of this node
    pub field_type: FieldType,

    /// Dispatch category, computed once from the subject type
    pub category: TypeCategory,

    /// Owning member name; `None` for the root and for container elements
    pub member: Option<String>,

    /// Constraint declarations attached to the owning member
    pub constraints: Vec<Constraint>,

    /// Child definitions (object nodes only)
    pub children: Vec<Definition>,
}

impl Definition {
    /// A member-less, unconstrained node for a bare type.
    ///
    /// Used for container elements and map keys/values.
    pub fn of(field_type: FieldType) -> Self {
        let category = field_type.category();
        Self {
            field_type,
            category,
            member: None,
            constraints: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Build the node for a structural member. Children stay empty; object
    /// members are expanded through the parser arena.
    fn for_field(field: &FieldDef) -> Self {
        let category = field.field_type.category();
        Self {
            field_type: field.field_type.clone(),
            category,
            member: Some(field.name.clone()),
            constraints: field.constraints.clone(),
            children: Vec::new(),
        }
    }

    /// Generic element types of this node (array/list element, map key and
    /// value), in declaration order.
    pub fn element_types(&self) -> Vec<&FieldType> {
        match &self.field_type {
            FieldType::Array { element_type } | FieldType::List { element_type } => {
                vec![element_type]
            }
            FieldType::Map {
                key_type,
                value_type,
            } => vec![key_type, value_type],
            _ => Vec::new(),
        }
    }

    /// Look up an attached declaration by kind.
    pub fn constraint(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.kind() == kind)
    }

    /// Whether this node carries any constraint declarations.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Diagnostic label: the owning member name, or the subject type.
    pub fn label(&self) -> String {
        match &self.member {
            Some(member) => member.clone(),
            None => self.field_type.to_string(),
        }
    }
}

/// Parser turning registered types into [`Definition`] trees.
///
/// Create one per generation request; parsed subtrees are memoized in an
/// arena keyed by type name, so repeated occurrences of a type share one
/// build.
pub struct DefinitionParser<'a> {
    registry: &'a SchemaRegistry,
    arena: HashMap<String, Definition>,
}

impl<'a> DefinitionParser<'a> {
    /// Create a parser over a registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            arena: HashMap::new(),
        }
    }

    /// Parse a named type into a Definition tree.
    ///
    /// The root's members form the first tier; members whose own type is an
    /// object get that type's direct members inlined as a second tier.
    /// Deeper nesting is left to [`expand`](Self::expand) at dispatch time.
    pub fn parse(&mut self, type_name: &str) -> Result<Definition, SchemaError> {
        let mut root = self.type_definition(type_name)?.clone();

        let children = std::mem::take(&mut root.children);
        root.children = children
            .into_iter()
            .map(|child| {
                if child.category == TypeCategory::Object {
                    self.expand(&child)
                } else {
                    Ok(child)
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(root)
    }

    /// Fill in the direct members of an object node whose children were not
    /// pre-built.
    ///
    /// Non-object nodes and already-expanded nodes come back unchanged.
    pub fn expand(&mut self, definition: &Definition) -> Result<Definition, SchemaError> {
        let FieldType::Object { type_name } = &definition.field_type else {
            return Ok(definition.clone());
        };
        if !definition.children.is_empty() {
            return Ok(definition.clone());
        }

        let canonical = self.type_definition(type_name)?;
        let mut expanded = definition.clone();
        expanded.children = canonical.children.clone();
        Ok(expanded)
    }

    /// The memoized single-tier tree for a named type.
    fn type_definition(&mut self, type_name: &str) -> Result<&Definition, SchemaError> {
        if !self.arena.contains_key(type_name) {
            let type_def = self.registry.require_type(type_name)?;
            let children = type_def.eligible_fields().map(Definition::for_field).collect();
            let built = Definition {
                field_type: FieldType::object(type_name),
                category: TypeCategory::Object,
                member: None,
                constraints: Vec::new(),
                children,
            };
            self.arena.insert(type_name.to_string(), built);
        }

        // Present after the insert above
        Ok(&self.arena[type_name])
    }
}
