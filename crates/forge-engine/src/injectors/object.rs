//! Object instance synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use forge_core::{Definition, FieldType, TypeCategory, Value};

/// Builds a named object instance member by member.
///
/// Nodes without pre-built children are expanded through the request's
/// definition arena first, so nesting past the parser's pre-built tiers is
/// resolved here, bounded by the context's depth guard. Member failures
/// are wrapped with the owning type and member name.
pub struct ObjectInjector;

impl Injector for ObjectInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Object]
    }

    fn inject(
        &self,
        definition: &Definition,
        dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        let FieldType::Object { type_name } = &definition.field_type else {
            return Ok(Value::zero_of(&definition.field_type));
        };
        let type_name = type_name.clone();

        let expanded;
        let node = if definition.children.is_empty() {
            expanded = ctx.expand(definition)?;
            &expanded
        } else {
            definition
        };

        let mut fields = Vec::with_capacity(node.children.len());
        for child in &node.children {
            let member = child.member.clone().unwrap_or_default();
            let value =
                dispatcher
                    .dispatch(child, ctx)
                    .map_err(|source| GenerateError::Member {
                        type_name: type_name.clone(),
                        member: member.clone(),
                        source: Box::new(source),
                    })?;
            fields.push((member, value));
        }

        Ok(Value::Object { type_name, fields })
    }
}
