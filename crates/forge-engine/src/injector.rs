//! Injector registry and dispatch.
//!
//! Each [`Injector`] owns a fixed set of type categories. The [`Dispatcher`]
//! maps a node's category to its unique injector, recurses through child
//! nodes, and routes constrained candidates through the processor chain
//! before a value is accepted.

use crate::context::GenContext;
use crate::error::{BuildError, GenerateError};
use crate::processors::ProcessorChain;
use forge_core::{Definition, TypeCategory, Value};
use std::collections::HashMap;

/// A stateless synthesizer for one or more type categories.
///
/// Injectors recurse through the dispatcher reference, never by owning it.
pub trait Injector: Send + Sync {
    /// The categories this injector owns.
    fn categories(&self) -> &'static [TypeCategory];

    /// Synthesize a value for a node.
    fn inject(
        &self,
        definition: &Definition,
        dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError>;
}

/// Category-keyed injector registry.
///
/// Populated once at startup and read-only thereafter; duplicate
/// registration for a category is a configuration error caught here, not at
/// generation time.
pub struct Dispatcher {
    injectors: Vec<Box<dyn Injector>>,
    slots: HashMap<TypeCategory, usize>,
    chain: ProcessorChain,
}

impl Dispatcher {
    /// Build a dispatcher from ordered injectors and a processor chain.
    pub fn new(
        injectors: Vec<Box<dyn Injector>>,
        chain: ProcessorChain,
    ) -> Result<Self, BuildError> {
        let mut slots = HashMap::new();
        for (idx, injector) in injectors.iter().enumerate() {
            for &category in injector.categories() {
                if slots.insert(category, idx).is_some() {
                    return Err(BuildError::DuplicateInjector(category));
                }
            }
        }
        Ok(Self {
            injectors,
            slots,
            chain,
        })
    }

    /// Generate a value for a schema node.
    ///
    /// Applies the depth guard, the policy's absence draw, injector
    /// selection, and the constraint chain, in that order.
    pub fn dispatch(
        &self,
        definition: &Definition,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        if ctx.exceeded_depth() {
            tracing::trace!(path = %ctx.path(), "depth guard hit, taking zero value");
            return Ok(Value::zero_of(&definition.field_type));
        }

        if ctx.policy.is_absent(definition, &mut ctx.rng) {
            return Ok(Value::Null);
        }

        let Some(&slot) = self.slots.get(&definition.category) else {
            return Err(GenerateError::Unsupported {
                category: definition.category,
                path: ctx.path(),
            });
        };

        ctx.enter(definition.label());
        let result = self.injectors[slot].inject(definition, self, ctx);
        ctx.leave();
        let value = result?;

        if definition.has_constraints() {
            self.chain.process(definition, value, ctx)
        } else {
            Ok(value)
        }
    }
}
