//! Constraint processor chain.
//!
//! Processors run in registry order as a fold over [`Flow`]: each processor
//! that understands a node's declaration inspects the current
//! [`DataStatement`] and either hands an updated statement to the rest of
//! the chain or halts with a final value. Unrecognized constraint kinds
//! pass through unenforced in every mode; that is intentional, not a gap.

pub mod presence;
pub mod range;
pub mod size;
pub mod truth;

pub use presence::PresenceProcessor;
pub use range::RangeProcessor;
pub use size::SizeProcessor;
pub use truth::TruthProcessor;

use crate::context::GenContext;
use crate::error::GenerateError;
use crate::statement::{DataStatement, Flow};
use forge_core::{Constraint, ConstraintKind, Definition, Value};

/// A stateless strategy owning one or more constraint kinds.
pub trait ConstraintProcessor: Send + Sync {
    /// Whether this processor understands a declaration kind.
    fn handles(&self, kind: ConstraintKind) -> bool;

    /// Inspect or rewrite the candidate value for one declaration.
    fn apply(
        &self,
        constraint: &Constraint,
        definition: &Definition,
        statement: DataStatement,
        ctx: &mut GenContext,
    ) -> Result<Flow, GenerateError>;
}

/// Ordered chain of constraint processors.
pub struct ProcessorChain {
    processors: Vec<Box<dyn ConstraintProcessor>>,
}

impl ProcessorChain {
    /// Build a chain; order is preserved as given.
    pub fn new(processors: Vec<Box<dyn ConstraintProcessor>>) -> Self {
        Self { processors }
    }

    /// Number of registered processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run a candidate value through the chain for one node.
    pub fn process(
        &self,
        definition: &Definition,
        value: Value,
        ctx: &mut GenContext,
    ) -> Result<Value, GenerateError> {
        let mut statement = DataStatement::new(value);

        for processor in &self.processors {
            for constraint in &definition.constraints {
                if !processor.handles(constraint.kind()) {
                    continue;
                }
                match processor.apply(constraint, definition, statement, ctx)? {
                    Flow::Continue(next) => statement = next,
                    Flow::Halt(done) => {
                        tracing::trace!(
                            kind = ?constraint.kind(),
                            path = %ctx.path(),
                            "constraint chain halted"
                        );
                        return Ok(done.into_value());
                    }
                }
            }
        }

        Ok(statement.into_value())
    }
}
