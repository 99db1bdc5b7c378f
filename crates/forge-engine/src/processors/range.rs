//! Numeric range constraints.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::policy::GenerationMode;
use crate::processors::ConstraintProcessor;
use crate::statement::{DataStatement, Flow};
use forge_core::{Constraint, ConstraintKind, Definition, FieldType, Value};

/// Clamps into or pushes out of a `[min, max]` range.
pub struct RangeProcessor;

impl RangeProcessor {
    /// Write an i64 back in the node's integer width.
    ///
    /// Returns `None` when the value does not fit the width.
    fn in_width(definition: &Definition, value: i64) -> Option<Value> {
        match &definition.field_type {
            FieldType::Int => i32::try_from(value).ok().map(Value::Int),
            _ => Some(Value::BigInt(value)),
        }
    }
}

impl ConstraintProcessor for RangeProcessor {
    fn handles(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Range
    }

    fn apply(
        &self,
        constraint: &Constraint,
        definition: &Definition,
        statement: DataStatement,
        ctx: &mut GenContext,
    ) -> Result<Flow, GenerateError> {
        let Constraint::Range { min, max } = constraint else {
            return Ok(Flow::Continue(statement));
        };

        match ctx.policy.mode {
            GenerationMode::Satisfy => {
                let current = statement.value.as_i64().unwrap_or(*min);
                let clamped = current.clamp(*min, *max);
                let value = Self::in_width(definition, clamped)
                    .unwrap_or(Value::BigInt(clamped));
                Ok(Flow::Continue(statement.with_value(value)))
            }
            GenerationMode::Violate => {
                // Prefer overshooting the maximum; fall back to undershooting
                let candidates = [max.checked_add(1), min.checked_sub(1)];
                for candidate in candidates.into_iter().flatten() {
                    if let Some(value) = Self::in_width(definition, candidate) {
                        return Ok(Flow::Halt(statement.with_value(value)));
                    }
                }
                // Range covers the whole width, nothing to violate
                Ok(Flow::Continue(statement))
            }
            GenerationMode::Zero | GenerationMode::Chaotic => Ok(Flow::Continue(statement)),
        }
    }
}
