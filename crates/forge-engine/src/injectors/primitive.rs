//! Scalar leaf value synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use crate::injectors::random_text;
use crate::policy::GenerationMode;
use forge_core::{Definition, FieldType, TypeCategory, Value};
use rand::Rng;
use uuid::Uuid;

/// Draws scalar values within the policy bounds for their kind.
///
/// Under zero mode every kind takes its canonical zero instead.
pub struct PrimitiveInjector;

/// Random UUID v4 built from the seeded RNG, so instances stay
/// reproducible.
fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

impl Injector for PrimitiveInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Primitive]
    }

    fn inject(
        &self,
        definition: &Definition,
        _dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        if ctx.policy.mode == GenerationMode::Zero {
            return Ok(Value::zero_of(&definition.field_type));
        }

        let policy = ctx.policy;
        let value = match &definition.field_type {
            FieldType::Bool => Value::Bool(ctx.rng.gen_bool(policy.true_probability)),
            FieldType::Int => Value::Int(ctx.rng.gen_range(policy.min_int..=policy.max_int)),
            FieldType::BigInt => {
                Value::BigInt(ctx.rng.gen_range(policy.min_big_int..=policy.max_big_int))
            }
            FieldType::Float => {
                Value::Float(ctx.rng.gen_range(policy.min_float..=policy.max_float))
            }
            FieldType::Text => Value::Text(random_text(
                &mut ctx.rng,
                policy.min_text_len,
                policy.max_text_len,
            )),
            FieldType::Uuid => Value::Uuid(random_uuid(&mut ctx.rng)),
            other => Value::zero_of(other),
        };

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ModePolicy;
    use crate::processors::ProcessorChain;
    use forge_core::SchemaRegistry;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(vec![Box::new(PrimitiveInjector)], ProcessorChain::new(vec![])).unwrap()
    }

    #[test]
    fn test_int_within_policy_bounds() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            mode: GenerationMode::Chaotic,
            min_int: 10,
            max_int: 20,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::Int);

        let mut ctx = GenContext::new(&registry, &policy, 42);
        for _ in 0..100 {
            let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
            let v = value.as_i32().expect("int value");
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_float_within_policy_bounds() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            mode: GenerationMode::Satisfy,
            min_float: -1.0,
            max_float: 1.0,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::Float);

        let mut ctx = GenContext::new(&registry, &policy, 42);
        for _ in 0..100 {
            let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
            let v = value.as_f64().expect("float value");
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_text_length_within_bounds() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy {
            min_text_len: 3,
            max_text_len: 5,
            ..ModePolicy::default()
        };
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::Text);

        let mut ctx = GenContext::new(&registry, &policy, 42);
        for _ in 0..50 {
            let value = dispatcher.dispatch(&def, &mut ctx).unwrap();
            assert!((3..=5).contains(&value.len().expect("sized value")));
        }
    }

    #[test]
    fn test_zero_mode_yields_kind_zero() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::with_mode(GenerationMode::Zero);
        let dispatcher = dispatcher();
        let mut ctx = GenContext::new(&registry, &policy, 42);

        let cases = [
            (FieldType::Bool, Value::Bool(false)),
            (FieldType::Int, Value::Int(0)),
            (FieldType::BigInt, Value::BigInt(0)),
            (FieldType::Float, Value::Float(0.0)),
            (FieldType::Text, Value::Text(String::new())),
            (FieldType::Uuid, Value::Uuid(Uuid::nil())),
        ];
        for (field_type, expected) in cases {
            let def = Definition::of(field_type);
            assert_eq!(dispatcher.dispatch(&def, &mut ctx).unwrap(), expected);
        }
    }

    #[test]
    fn test_uuid_version_and_determinism() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::default();
        let dispatcher = dispatcher();
        let def = Definition::of(FieldType::Uuid);

        let mut ctx1 = GenContext::new(&registry, &policy, 42);
        let mut ctx2 = GenContext::new(&registry, &policy, 42);

        let v1 = dispatcher.dispatch(&def, &mut ctx1).unwrap();
        let v2 = dispatcher.dispatch(&def, &mut ctx2).unwrap();
        assert_eq!(v1, v2);

        let uuid = v1.as_uuid().expect("uuid value");
        assert_eq!(uuid.get_version_num(), 4);
    }
}
