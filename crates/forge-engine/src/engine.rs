//! Generator assembly and the single entry point for all modes.

use crate::context::GenContext;
use crate::error::{BuildError, GenerateError};
use crate::injector::{Dispatcher, Injector};
use crate::policy::{GenerationMode, ModePolicy};
use crate::processors::{ConstraintProcessor, ProcessorChain};
use forge_core::{SchemaRegistry, Value};

/// Supplies the injectors and processors a [`Generator`] is built from.
///
/// Implementations decide which components exist; the generator only wires
/// them together. Processor order is the order constraints are applied in.
pub trait ComponentSource {
    fn injectors(&self) -> Vec<Box<dyn Injector>>;
    fn processors(&self) -> Vec<Box<dyn ConstraintProcessor>>;
}

/// Schema-driven synthetic data generator.
///
/// One generator serves every mode; the mode travels with the request's
/// policy rather than selecting a different engine. Construction validates
/// the component set once, so `create` never has to.
pub struct Generator {
    registry: SchemaRegistry,
    dispatcher: Dispatcher,
    seed: u64,
}

impl Generator {
    /// Build a generator over a schema from a component source.
    ///
    /// Fails if two injectors claim the same type category.
    pub fn new(registry: SchemaRegistry, source: &dyn ComponentSource) -> Result<Self, BuildError> {
        let chain = ProcessorChain::new(source.processors());
        let dispatcher = Dispatcher::new(source.injectors(), chain)?;
        Ok(Self {
            registry,
            dispatcher,
            seed: rand::random(),
        })
    }

    /// Pin the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The schema this generator serves.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Generate one instance of a named type under a mode's default policy.
    pub fn create(&self, type_name: &str, mode: GenerationMode) -> Result<Value, GenerateError> {
        self.create_with(type_name, &ModePolicy::with_mode(mode))
    }

    /// Generate one instance of a named type under an explicit policy.
    pub fn create_with(
        &self,
        type_name: &str,
        policy: &ModePolicy,
    ) -> Result<Value, GenerateError> {
        policy.validate().map_err(GenerateError::from)?;

        let mut ctx = GenContext::new(&self.registry, policy, self.seed);
        let definition = ctx.parse(type_name)?;

        tracing::debug!(
            type_name,
            mode = ?policy.mode,
            seed = self.seed,
            "generating instance"
        );
        self.dispatcher.dispatch(&definition, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injectors::{MapInjector, ObjectInjector, PrimitiveInjector, SequenceInjector};
    use crate::processors::{PresenceProcessor, RangeProcessor, SizeProcessor, TruthProcessor};
    use forge_core::{Constraint, TypeCategory};

    struct TestComponents;

    impl ComponentSource for TestComponents {
        fn injectors(&self) -> Vec<Box<dyn Injector>> {
            vec![
                Box::new(PrimitiveInjector),
                Box::new(SequenceInjector),
                Box::new(MapInjector),
                Box::new(ObjectInjector),
            ]
        }

        fn processors(&self) -> Vec<Box<dyn ConstraintProcessor>> {
            vec![
                Box::new(PresenceProcessor),
                Box::new(TruthProcessor),
                Box::new(RangeProcessor),
                Box::new(SizeProcessor),
            ]
        }
    }

    struct ClashingComponents;

    impl ComponentSource for ClashingComponents {
        fn injectors(&self) -> Vec<Box<dyn Injector>> {
            vec![Box::new(PrimitiveInjector), Box::new(PrimitiveInjector)]
        }

        fn processors(&self) -> Vec<Box<dyn ConstraintProcessor>> {
            vec![]
        }
    }

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_yaml(
            r#"
version: 1
types:
  - name: account
    fields:
      - name: active
        type: bool
        constraints:
          - type: assert_true
      - name: balance
        type: int
        constraints:
          - type: range
            min: 10
            max: 20
      - name: tags
        type:
          type: list
          element_type: text
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_injector_fails_at_build_time() {
        let result = Generator::new(registry(), &ClashingComponents);
        assert!(matches!(
            result,
            Err(BuildError::DuplicateInjector(TypeCategory::Primitive))
        ));
    }

    #[test]
    fn test_satisfy_honors_declared_constraints() {
        let generator = Generator::new(registry(), &TestComponents)
            .unwrap()
            .with_seed(7);

        let value = generator.create("account", GenerationMode::Satisfy).unwrap();

        assert_eq!(value.field("active"), Some(&Value::Bool(true)));
        let balance = value.field("balance").and_then(Value::as_i64).unwrap();
        assert!((10..=20).contains(&balance));
    }

    #[test]
    fn test_violate_breaks_a_declared_constraint() {
        let generator = Generator::new(registry(), &TestComponents)
            .unwrap()
            .with_seed(7);

        let value = generator.create("account", GenerationMode::Violate).unwrap();

        let active = Constraint::AssertTrue;
        let balance = Constraint::Range { min: 10, max: 20 };
        let active_ok = active.holds_for(value.field("active").unwrap());
        let balance_ok = balance.holds_for(value.field("balance").unwrap());
        assert!(!active_ok);
        assert!(!balance_ok);
    }

    #[test]
    fn test_zero_mode_produces_canonical_zeros() {
        let generator = Generator::new(registry(), &TestComponents)
            .unwrap()
            .with_seed(7);

        let value = generator.create("account", GenerationMode::Zero).unwrap();

        assert_eq!(value.field("tags"), Some(&Value::Array(vec![])));
        assert_eq!(value.field("balance"), Some(&Value::Int(0)));
        assert_eq!(value.field("active"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = Generator::new(registry(), &TestComponents)
            .unwrap()
            .with_seed(99);
        let b = Generator::new(registry(), &TestComponents)
            .unwrap()
            .with_seed(99);

        assert_eq!(
            a.create("account", GenerationMode::Satisfy).unwrap(),
            b.create("account", GenerationMode::Satisfy).unwrap()
        );
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let generator = Generator::new(registry(), &TestComponents).unwrap();
        let policy = ModePolicy {
            min_int: 5,
            max_int: 1,
            ..ModePolicy::default()
        };

        let result = generator.create_with("account", &policy);
        assert!(matches!(
            result,
            Err(GenerateError::Build(BuildError::InvalidPolicy(_)))
        ));
    }

    #[test]
    fn test_unknown_type_surfaces_schema_error() {
        let generator = Generator::new(registry(), &TestComponents).unwrap();
        let result = generator.create("phantom", GenerationMode::Satisfy);
        assert!(matches!(result, Err(GenerateError::Schema(_))));
    }
}
