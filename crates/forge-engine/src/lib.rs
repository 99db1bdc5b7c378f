//! Schema-driven synthetic data generation engine.
//!
//! One [`Generator`] serves four generation modes; the mode travels with
//! the request's [`ModePolicy`] instead of selecting a different engine:
//!
//! - `Satisfy` — values honor every recognized constraint declaration
//! - `Violate` — one recognized declaration per node is deliberately broken
//! - `Zero` — every node takes its canonical zero/empty representation
//! - `Chaotic` — unconstrained randomness with probabilistic absence
//!
//! ```text
//! Generator::create(type, mode)
//!      |
//!      v
//! GenContext ── DefinitionParser (request-local arena)
//!      |
//!      v
//! Dispatcher ── category -> Injector
//!      |             (containers recurse through the dispatcher)
//!      v
//! ProcessorChain ── ordered fold over constraint declarations
//!      |             (Continue rewrites, Halt finalizes)
//!      v
//!    Value
//! ```
//!
//! Injectors synthesize candidate values per type category; the processor
//! chain then enforces, breaks, or ignores each node's declarations
//! according to the active mode. Components are registered once through a
//! [`ComponentSource`]; duplicate category registration fails at build
//! time, not at generation time.

pub mod context;
pub mod engine;
pub mod error;
pub mod injector;
pub mod injectors;
pub mod policy;
pub mod processors;
pub mod statement;

pub use context::GenContext;
pub use engine::{ComponentSource, Generator};
pub use error::{BuildError, GenerateError};
pub use injector::{Dispatcher, Injector};
pub use injectors::{
    DomainInjector, DomainProvider, MapInjector, ObjectInjector, PrimitiveInjector,
    SequenceInjector, TemporalInjector,
};
pub use policy::{GenerationMode, ModePolicy};
pub use processors::{
    ConstraintProcessor, PresenceProcessor, ProcessorChain, RangeProcessor, SizeProcessor,
    TruthProcessor,
};
pub use statement::{DataStatement, Flow};
