//! Schema-driven synthetic data generation for automated testing.
//!
//! `fixture-forge` builds typed instance trees from a YAML schema. A schema
//! declares named types, their members, and per-member constraint
//! declarations; a single generator then produces instances under one of
//! four modes: satisfying the constraints, deliberately violating them,
//! canonical zero values, or unconstrained chaos.
//!
//! ```no_run
//! use fixture_forge::{BuiltinComponents, GenerationMode, Generator, SchemaRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::from_file("schema.yaml")?;
//! let generator = Generator::new(registry, &BuiltinComponents::new())?.with_seed(42);
//!
//! let valid = generator.create("user", GenerationMode::Satisfy)?;
//! let invalid = generator.create("user", GenerationMode::Violate)?;
//! println!("{}", valid.to_json());
//! # Ok(())
//! # }
//! ```
//!
//! The schema model lives in [`forge_core`], the engine in [`forge_engine`];
//! this crate re-exports both and supplies [`BuiltinComponents`], the stock
//! injector and processor set.

pub use forge_core::{
    Constraint, ConstraintKind, Definition, FieldDef, FieldType, SchemaError, SchemaRegistry,
    TypeCategory, TypeDef, Value,
};
pub use forge_engine::{
    BuildError, ComponentSource, ConstraintProcessor, DomainInjector, DomainProvider,
    GenerateError, GenerationMode, Generator, Injector, MapInjector, ModePolicy, ObjectInjector,
    PresenceProcessor, PrimitiveInjector, RangeProcessor, SequenceInjector, SizeProcessor,
    TemporalInjector, TruthProcessor,
};

use std::collections::HashMap;
use std::sync::Arc;

/// The stock component set: one injector per type category and the four
/// built-in constraint processors, in enforcement order.
///
/// Domain providers are optional; markers without one fall back to plain
/// text, so a bare `BuiltinComponents::new()` handles any schema.
#[derive(Default)]
pub struct BuiltinComponents {
    providers: HashMap<String, Arc<dyn DomainProvider>>,
}

impl BuiltinComponents {
    /// The stock set with no domain providers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain provider under a marker.
    pub fn with_provider(
        mut self,
        marker: impl Into<String>,
        provider: Arc<dyn DomainProvider>,
    ) -> Self {
        self.providers.insert(marker.into(), provider);
        self
    }
}

impl ComponentSource for BuiltinComponents {
    fn injectors(&self) -> Vec<Box<dyn Injector>> {
        vec![
            Box::new(PrimitiveInjector),
            Box::new(TemporalInjector),
            Box::new(DomainInjector::with_providers(self.providers.clone())),
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

/// Build a seeded generator with the stock components.
pub fn generator(registry: SchemaRegistry, seed: u64) -> Result<Generator, BuildError> {
    Ok(Generator::new(registry, &BuiltinComponents::new())?.with_seed(seed))
}
