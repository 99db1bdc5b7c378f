//! Error types for the generation engine.

use forge_core::{SchemaError, TypeCategory};

/// Configuration errors reported while assembling the engine.
///
/// These are fatal: a mis-assembled dispatcher or an inconsistent policy
/// never reaches generation.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Two injectors claimed the same type category
    #[error("Duplicate injector registered for category {0:?}")]
    DuplicateInjector(TypeCategory),

    /// Policy bounds are inconsistent (min > max, probability outside [0, 1])
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

/// Errors raised during a generation request.
///
/// A failing node fails the whole request; there is no partial-result mode.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Schema lookup failed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Policy handed to the request was inconsistent
    #[error(transparent)]
    Build(#[from] BuildError),

    /// No injector owns the node's category
    #[error("No injector registered for category {category:?} at '{path}'")]
    Unsupported {
        /// Category of the unsupported node
        category: TypeCategory,
        /// Diagnostic path of the failing node
        path: String,
    },

    /// A member failed to generate; wraps the cause with its owner
    #[error("Failed to generate member '{member}' of type '{type_name}': {source}")]
    Member {
        /// Owning type name
        type_name: String,
        /// Failing member name
        member: String,
        /// Underlying failure
        #[source]
        source: Box<GenerateError>,
    },
}
