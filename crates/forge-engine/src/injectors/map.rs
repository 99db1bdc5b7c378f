//! Map synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use forge_core::{Definition, FieldType, TypeCategory, Value};

/// Generates key/value entries from the map's two generic parameters.
///
/// A randomly generated key equal to an existing one skips its entry, so a
/// map may come out smaller than the requested size. That under-fill is
/// accepted behavior, not a defect.
pub struct MapInjector;

impl Injector for MapInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Map]
    }

    fn inject(
        &self,
        definition: &Definition,
        dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        let (key_type, value_type) = match &definition.field_type {
            FieldType::Map {
                key_type,
                value_type,
            } => (key_type.as_ref().clone(), value_type.as_ref().clone()),
            other => return Ok(Value::zero_of(other)),
        };

        let size = ctx.policy.size_of(definition, &mut ctx.rng);
        let key_def = Definition::of(key_type);
        let value_def = Definition::of(value_type);

        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(size);
        for _ in 0..size {
            let key = dispatcher.dispatch(&key_def, ctx)?;
            if entries.iter().any(|(existing, _)| existing == &key) {
                continue;
            }
            let value = dispatcher.dispatch(&value_def, ctx)?;
            entries.push((key, value));
        }

        Ok(Value::Map(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injectors::PrimitiveInjector;
    use crate::policy::{GenerationMode, ModePolicy};
    use crate::processors::ProcessorChain;
    use forge_core::SchemaRegistry;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            vec![Box::new(MapInjector), Box::new(PrimitiveInjector)],
            ProcessorChain::new(vec![]),
        )
        .unwrap()
    }

    #[test]
    fn test_entries_at_most_requested_size() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            min_size: 3,
            max_size: 3,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::map(FieldType::Text, FieldType::Int));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        let entries = value.as_entries().expect("map value");
        assert!(entries.len() <= 3);
    }

    #[test]
    fn test_keys_are_unique() {
        let registry = SchemaRegistry::new(vec![]);
        // Boolean keys collide constantly; the map must still stay unique
        let policy = ModePolicy {
            min_size: 8,
            max_size: 8,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::map(FieldType::Bool, FieldType::Int));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        let entries = value.as_entries().expect("map value");

        assert!(entries.len() <= 2);
        for (idx, (key, _)) in entries.iter().enumerate() {
            assert!(!entries[..idx].iter().any(|(other, _)| other == key));
        }
    }

    #[test]
    fn test_zero_mode_empty_map() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            mode: GenerationMode::Zero,
            min_size: 0,
            max_size: 4,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::map(FieldType::Text, FieldType::Float));

        let mut ctx = GenContext::new(&registry, &policy, 42);
        let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
        assert_eq!(value, Value::Map(vec![]));
    }
}
