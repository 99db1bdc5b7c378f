//! Domain-flavored string synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use crate::injectors::random_text;
use crate::policy::GenerationMode;
use forge_core::{Definition, FieldType, TypeCategory, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// External collaborator producing one flavor of domain string
/// (addresses, id numbers, names, phone numbers, and the like).
pub trait DomainProvider: Send + Sync {
    /// Produce one domain-flavored string.
    fn generate(&self) -> String;
}

/// Routes domain members to their registered provider.
///
/// Markers without a registered provider fall back to plain text
/// synthesis, so a schema stays usable while its providers are wired up.
pub struct DomainInjector {
    providers: HashMap<String, Arc<dyn DomainProvider>>,
}

impl DomainInjector {
    /// An injector with no providers; every marker falls back to text.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Build from a marker-to-provider table.
    pub fn with_providers(providers: HashMap<String, Arc<dyn DomainProvider>>) -> Self {
        Self { providers }
    }

    /// Register a provider under a marker.
    pub fn register(mut self, marker: impl Into<String>, provider: Arc<dyn DomainProvider>) -> Self {
        self.providers.insert(marker.into(), provider);
        self
    }
}

impl Default for DomainInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl Injector for DomainInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Domain]
    }

    fn inject(
        &self,
        definition: &Definition,
        _dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        if ctx.policy.mode == GenerationMode::Zero {
            return Ok(Value::Text(String::new()));
        }

        let FieldType::Domain { provider } = &definition.field_type else {
            return Ok(Value::zero_of(&definition.field_type));
        };

        let text = match self.providers.get(provider) {
            Some(provider) => provider.generate(),
            None => {
                tracing::trace!(marker = %provider, "no domain provider, using plain text");
                random_text(
                    &mut ctx.rng,
                    ctx.policy.min_text_len,
                    ctx.policy.max_text_len,
                )
            }
        };

        Ok(Value::Text(text))
    }
}
