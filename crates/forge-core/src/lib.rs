//! Schema model for the fixture-forge data generator.
//!
//! This crate provides the foundational types shared by the generation
//! engine and its consumers:
//!
//! - [`FieldType`] - Type universe for generated members
//! - [`Value`] - Generated value tree (the in-memory instance)
//! - [`Constraint`] - Declarative validation constraints attached to members
//! - [`SchemaRegistry`] - Named object types loaded from YAML
//! - [`Definition`] - Parsed schema node consumed by the dispatcher
//!
//! # Architecture
//!
//! ```text
//! SchemaRegistry (YAML)
//!        │
//!        ▼
//! DefinitionParser ──▶ Definition tree (two tiers pre-built, memoized arena)
//!        │
//!        ▼
//! forge-engine dispatch ──▶ Value tree
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{DefinitionParser, SchemaRegistry, TypeCategory};
//!
//! let registry = SchemaRegistry::from_yaml(r#"
//! version: 1
//! types:
//!   - name: user
//!     fields:
//!       - name: age
//!         type: int
//!         constraints:
//!           - type: range
//!             min: 18
//!             max: 120
//! "#).unwrap();
//!
//! let mut parser = DefinitionParser::new(&registry);
//! let definition = parser.parse("user").unwrap();
//! assert_eq!(definition.category, TypeCategory::Object);
//! assert_eq!(definition.children.len(), 1);
//! ```

pub mod constraint;
pub mod definition;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use constraint::{Constraint, ConstraintKind};
pub use definition::{Definition, DefinitionParser};
pub use schema::{FieldDef, SchemaError, SchemaRegistry, TypeDef};
pub use types::{FieldType, TypeCategory};
pub use values::Value;
