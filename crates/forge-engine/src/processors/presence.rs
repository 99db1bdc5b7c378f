//! Presence constraints: `not_null` and `null`.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::injectors::random_text;
use crate::policy::GenerationMode;
use crate::processors::ConstraintProcessor;
use crate::statement::{DataStatement, Flow};
use forge_core::{Constraint, ConstraintKind, Definition, FieldType, Value};

/// Enforces required or forbidden presence.
///
/// Halts the chain whenever it settles presence: a forced `Null` would be
/// undone by later coercions, and a violated `not_null` leaves nothing for
/// later processors to work on.
pub struct PresenceProcessor;

impl PresenceProcessor {
    /// A non-null stand-in for the node's type.
    ///
    /// Text members get a non-empty string; everything else takes its zero
    /// value, which is never null.
    fn substitute(definition: &Definition, ctx: &mut GenContext) -> Value {
        match &definition.field_type {
            FieldType::Text | FieldType::Domain { .. } => Value::Text(random_text(
                &mut ctx.rng,
                ctx.policy.min_text_len.max(1),
                ctx.policy.max_text_len.max(1),
            )),
            other => Value::zero_of(other),
        }
    }
}

impl ConstraintProcessor for PresenceProcessor {
    fn handles(&self, kind: ConstraintKind) -> bool {
        matches!(kind, ConstraintKind::NotNull | ConstraintKind::Null)
    }

    fn apply(
        &self,
        constraint: &Constraint,
        definition: &Definition,
        statement: DataStatement,
        ctx: &mut GenContext,
    ) -> Result<Flow, GenerateError> {
        match (ctx.policy.mode, constraint) {
            (GenerationMode::Satisfy, Constraint::NotNull) => {
                let needs_substitute = statement.value.is_null()
                    || matches!(&statement.value, Value::Text(s) if s.is_empty());
                if needs_substitute {
                    let value = Self::substitute(definition, ctx);
                    Ok(Flow::Continue(statement.with_value(value)))
                } else {
                    Ok(Flow::Continue(statement))
                }
            }
            (GenerationMode::Satisfy, Constraint::Null) => {
                Ok(Flow::Halt(statement.with_value(Value::Null)))
            }
            (GenerationMode::Violate, Constraint::NotNull) => {
                Ok(Flow::Halt(statement.with_value(Value::Null)))
            }
            (GenerationMode::Violate, Constraint::Null) => {
                let value = Self::substitute(definition, ctx);
                Ok(Flow::Halt(statement.with_value(value)))
            }
            _ => Ok(Flow::Continue(statement)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ModePolicy;
    use forge_core::SchemaRegistry;

    fn ctx_with_mode<'a>(
        registry: &'a SchemaRegistry,
        policy: &'a ModePolicy,
    ) -> GenContext<'a> {
        GenContext::new(registry, policy, 42)
    }

    fn text_def() -> Definition {
        let mut def = Definition::of(FieldType::Text);
        def.constraints.push(Constraint::NotNull);
        def
    }

    #[test]
    fn test_satisfy_replaces_null_and_empty_text() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::with_mode(GenerationMode::Satisfy);
        let mut ctx = ctx_with_mode(&registry, &policy);
        let def = text_def();

        for candidate in [Value::Null, Value::Text(String::new())] {
            let flow = PresenceProcessor
                .apply(
                    &Constraint::NotNull,
                    &def,
                    DataStatement::new(candidate),
                    &mut ctx,
                )
                .unwrap();
            let Flow::Continue(statement) = flow else {
                panic!("Expected Continue");
            };
            let text = statement.value.as_str().expect("text value");
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_satisfy_keeps_present_value() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::with_mode(GenerationMode::Satisfy);
        let mut ctx = ctx_with_mode(&registry, &policy);

        let flow = PresenceProcessor
            .apply(
                &Constraint::NotNull,
                &text_def(),
                DataStatement::new(Value::Text("kept".to_string())),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(
            flow,
            Flow::Continue(DataStatement::new(Value::Text("kept".to_string())))
        );
    }

    #[test]
    fn test_violate_not_null_halts_with_null() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::with_mode(GenerationMode::Violate);
        let mut ctx = ctx_with_mode(&registry, &policy);

        let flow = PresenceProcessor
            .apply(
                &Constraint::NotNull,
                &text_def(),
                DataStatement::new(Value::Text("present".to_string())),
                &mut ctx,
            )
            .unwrap();
        assert_eq!(flow, Flow::Halt(DataStatement::new(Value::Null)));
    }

    #[test]
    fn test_violate_null_halts_non_null() {
        let registry = SchemaRegistry::new(vec![]);
        let policy = ModePolicy::with_mode(GenerationMode::Violate);
        let mut ctx = ctx_with_mode(&registry, &policy);

        let mut def = Definition::of(FieldType::Int);
        def.constraints.push(Constraint::Null);

        let flow = PresenceProcessor
            .apply(&Constraint::Null, &def, DataStatement::new(Value::Null), &mut ctx)
            .unwrap();
        let Flow::Halt(statement) = flow else {
            panic!("Expected Halt");
        };
        assert!(!statement.value.is_null());
    }

    #[test]
    fn test_zero_and_chaotic_leave_value() {
        let registry = SchemaRegistry::new(vec![]);
        for mode in [GenerationMode::Zero, GenerationMode::Chaotic] {
            let policy = ModePolicy::with_mode(mode);
            let mut ctx = ctx_with_mode(&registry, &policy);

            let flow = PresenceProcessor
                .apply(
                    &Constraint::NotNull,
                    &text_def(),
                    DataStatement::new(Value::Null),
                    &mut ctx,
                )
                .unwrap();
            assert_eq!(flow, Flow::Continue(DataStatement::new(Value::Null)));
        }
    }
}
