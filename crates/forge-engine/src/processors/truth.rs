//! Fixed truth value constraints: `assert_true` and `assert_false`.

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::policy::GenerationMode;
use crate::processors::ConstraintProcessor;
use crate::statement::{DataStatement, Flow};
use forge_core::{Constraint, ConstraintKind, Definition, Value};

/// Forces or flips a boolean member.
pub struct TruthProcessor;

impl ConstraintProcessor for TruthProcessor {
    fn handles(&self, kind: ConstraintKind) -> bool {
        matches!(kind, ConstraintKind::AssertTrue | ConstraintKind::AssertFalse)
    }

    fn apply(
        &self,
        constraint: &Constraint,
        _definition: &Definition,
        statement: DataStatement,
        ctx: &mut GenContext,
    ) -> Result<Flow, GenerateError> {
        let required = matches!(constraint, Constraint::AssertTrue);

        match ctx.policy.mode {
            GenerationMode::Satisfy => {
                Ok(Flow::Continue(statement.with_value(Value::Bool(required))))
            }
            GenerationMode::Violate => {
                Ok(Flow::Halt(statement.with_value(Value::Bool(!required))))
            }
            GenerationMode::Zero | GenerationMode::Chaotic => Ok(Flow::Continue(statement)),
        }
    }
}
