//! Per-request generation context.

use crate::policy::ModePolicy;
use forge_core::{Definition, DefinitionParser, SchemaError, SchemaRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mutable state for one generation request.
///
/// Owns the seeded RNG, the request-local definition parser, and the
/// diagnostic call stack. Created per `create` call and discarded with it;
/// everything shared between requests stays immutable.
pub struct GenContext<'a> {
    /// Active policy, read-only for the duration of the request
    pub policy: &'a ModePolicy,

    /// Seeded random number generator for reproducibility
    pub rng: StdRng,

    parser: DefinitionParser<'a>,
    depth: usize,
    stack: Vec<String>,
}

impl<'a> GenContext<'a> {
    /// Create a context for one request.
    pub fn new(registry: &'a SchemaRegistry, policy: &'a ModePolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
            parser: DefinitionParser::new(registry),
            depth: 0,
            stack: Vec::new(),
        }
    }

    /// Parse a named type through the request-local arena.
    pub fn parse(&mut self, type_name: &str) -> Result<Definition, SchemaError> {
        self.parser.parse(type_name)
    }

    /// Expand an object node's direct members through the arena.
    pub fn expand(&mut self, definition: &Definition) -> Result<Definition, SchemaError> {
        self.parser.expand(definition)
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the depth guard has been reached.
    pub fn exceeded_depth(&self) -> bool {
        self.depth >= self.policy.max_depth
    }

    /// Diagnostic path of the node being generated.
    ///
    /// Used purely for error messages and trace output, never for control
    /// flow.
    pub fn path(&self) -> String {
        if self.stack.is_empty() {
            "<root>".to_string()
        } else {
            self.stack.join(".")
        }
    }

    pub(crate) fn enter(&mut self, label: String) {
        self.stack.push(label);
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
        self.depth = self.depth.saturating_sub(1);
    }
}
