//! Length bound constraints on sized values.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::policy::GenerationMode;
use crate::processors::ConstraintProcessor;
use crate::statement::{DataStatement, Flow};
use forge_core::{Constraint, ConstraintKind, Definition, Value};

/// Pads or truncates text and containers to honor or break `[min, max]`
/// length bounds.
pub struct SizeProcessor;

impl SizeProcessor {
    /// Coerce a value to an exact target length, when it has one.
    ///
    /// Text pads with `'x'`; arrays pad with the element type's zero value;
    /// maps pad with synthesized text keys, which stay unique by
    /// construction. Unsized values come back unchanged.
    fn resize(definition: &Definition, value: Value, target: usize) -> Value {
        match value {
            Value::Text(s) => {
                let mut chars: Vec<char> = s.chars().collect();
                chars.truncate(target);
                while chars.len() < target {
                    chars.push('x');
                }
                Value::Text(chars.into_iter().collect())
            }
            Value::Array(mut items) => {
                items.truncate(target);
                let filler = definition
                    .element_types()
                    .into_iter()
                    .next()
                    .map(Value::zero_of)
                    .unwrap_or(Value::Null);
                while items.len() < target {
                    items.push(filler.clone());
                }
                Value::Array(items)
            }
            Value::Map(mut entries) => {
                entries.truncate(target);
                let mut next = 0usize;
                while entries.len() < target {
                    let key = Value::Text(format!("pad_{next}"));
                    next += 1;
                    if entries.iter().any(|(k, _)| k == &key) {
                        continue;
                    }
                    entries.push((key, Value::Null));
                }
                Value::Map(entries)
            }
            other => other,
        }
    }
}

impl ConstraintProcessor for SizeProcessor {
    fn handles(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Size
    }

    fn apply(
        &self,
        constraint: &Constraint,
        definition: &Definition,
        statement: DataStatement,
        ctx: &mut GenContext,
    ) -> Result<Flow, GenerateError> {
        let Constraint::Size { min, max } = constraint else {
            return Ok(Flow::Continue(statement));
        };

        let Some(len) = statement.value.len() else {
            // Size on an unsized member is a schema authoring slip; leave it
            return Ok(Flow::Continue(statement));
        };

        match ctx.policy.mode {
            GenerationMode::Satisfy => {
                if (*min..=*max).contains(&len) {
                    return Ok(Flow::Continue(statement));
                }
                let target = len.clamp(*min, *max);
                let value = statement.value.clone();
                let resized = Self::resize(definition, value, target);
                Ok(Flow::Continue(statement.with_value(resized)))
            }
            GenerationMode::Violate => {
                let target = if *min > 0 { *min - 1 } else { *max + 1 };
                let value = statement.value.clone();
                let resized = Self::resize(definition, value, target);
                Ok(Flow::Halt(statement.with_value(resized)))
            }
            GenerationMode::Zero | GenerationMode::Chaotic => Ok(Flow::Continue(statement)),
        }
    }
}
