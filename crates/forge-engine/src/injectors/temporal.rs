//! Date/time value synthesis.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injector::{Dispatcher, Injector};
use crate::policy::GenerationMode;
use chrono::{DateTime, Utc};
use forge_core::{Definition, TypeCategory, Value};

/// Produces "now" for date/time members; bounds are not configurable.
///
/// Not deterministic across runs, matching timestamp-at-generation
/// semantics for created/updated style members. Zero mode takes the Unix
/// epoch.
pub struct TemporalInjector;

impl Injector for TemporalInjector {
    fn categories(&self) -> &'static [TypeCategory] {
        &[TypeCategory::Temporal]
    }

    fn inject(
        &self,
        _definition: &Definition,
        _dispatcher: &Dispatcher,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        let value = if ctx.policy.mode == GenerationMode::Zero {
            Value::DateTime(DateTime::<Utc>::UNIX_EPOCH)
        } else {
            Value::DateTime(Utc::now())
        };
        Ok(value)
    }
}
