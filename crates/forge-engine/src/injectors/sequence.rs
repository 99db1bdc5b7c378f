//! Array and collection synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use forge_core::{Definition, FieldType, TypeCategory, Value};

/// Fills arrays and order-preserving collections element by element.
///
/// The element count comes from the policy's size rule; each element is
/// dispatched from a member-less Definition of the element type, so nested
/// containers and objects recurse naturally.
pub struct SequenceInjector;

impl Injector for SequenceInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Array, TypeCategory::Collection]
    }

    fn inject(
        &self,
        definition: &Definition,
        dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        let element_type = match &definition.field_type {
            FieldType::Array { element_type } | FieldType::List { element_type } => {
                element_type.as_ref().clone()
            }
            other => return Ok(Value::zero_of(other)),
        };

        let size = ctx.policy.size_of(definition, &mut ctx.rng);
        let element_def = Definition::of(element_type);

        let mut items = Vec::with_capacity(size);
        for _ in 0..size {
            items.push(dispatcher.dispatch(&element_def, ctx)?);
        }

        Ok(Value::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injectors::PrimitiveInjector;
    use crate::policy::{GenerationMode, ModePolicy};
    use crate::processors::ProcessorChain;
    use forge_core::{Constraint, SchemaRegistry};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            vec![Box::new(SequenceInjector), Box::new(PrimitiveInjector)],
            ProcessorChain::new(vec![]),
        )
        .unwrap()
    }

    #[test]
    fn test_size_within_policy_bounds() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            min_size: 2,
            max_size: 4,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::list(FieldType::Int));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        for _ in 0..20 {
            let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
            let items = value.as_array().expect("array value");
            assert!((2..=4).contains(&items.len()));
            assert!(items.iter().all(|v| v.as_i32().is_some()));
        }
    }

    #[test]
    fn test_exact_size_from_constraint() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            mode: GenerationMode::Satisfy,
            min_size: 0,
            max_size: 9,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();

        let mut def = Definition::of(FieldType::array(FieldType::Int));
        def.constraints.push(Constraint::Size { min: 1, max: 1 });

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        assert_eq!(value.len(), Some(1));
    }

    #[test]
    fn test_zero_mode_takes_min_size() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            mode: GenerationMode::Zero,
            min_size: 0,
            max_size: 5,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::list(FieldType::Text));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        assert_eq!(value, Value::Array(vec![]));
    }

    #[test]
    fn test_nested_sequences_recurse() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            min_size: 1,
            max_size: 2,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::list(FieldType::list(FieldType::Bool)));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        let outer = value.as_array().expect("outer array");
        for inner in outer {
            assert!(inner.as_array().is_some());
        }
    }
}
