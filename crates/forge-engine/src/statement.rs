//! Per-node state carried through the constraint processor chain.

use forge_core::Value;
use std::collections::HashMap;

/// Transient carrier for a candidate value while the processor chain runs.
///
/// Created fresh for each node that carries constraint declarations and
/// discarded once the final value is read into the parent. The metadata map
/// is a small side channel for processor-to-processor hints.
#[derive(Debug, Clone, PartialEq)]
pub struct DataStatement {
    /// Candidate value under inspection
    pub value: Value,

    /// Processor-to-processor metadata
    meta: HashMap<String, String>,
}

impl DataStatement {
    /// Wrap a freshly synthesized candidate value.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            meta: HashMap::new(),
        }
    }

    /// Replace the candidate value.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Record a metadata entry.
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Look up a metadata entry.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Unwrap the final value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Sentinel controlling the chain fold.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Hand the statement to the next processor
    Continue(DataStatement),

    /// Stop the chain; the statement's value is final
    Halt(DataStatement),
}
