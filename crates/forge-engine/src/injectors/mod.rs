//! Built-in value synthesizers, one per type category.
//!
//! Each injector owns one slice of the type universe and is registered with
//! the dispatcher at startup. Container injectors recurse through the
//! dispatcher for their elements.

pub mod domain;
pub mod map;
pub mod object;
pub mod primitive;
pub mod sequence;
pub mod temporal;

pub use domain::{DomainInjector, DomainProvider};
pub use map::MapInjector;
pub use object::ObjectInjector;
pub use primitive::PrimitiveInjector;
pub use sequence::SequenceInjector;
pub use temporal::TemporalInjector;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random alphanumeric string with a length drawn from `[min_len, max_len]`.
pub(crate) fn random_text<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> String {
    let len = rng.gen_range(min_len..=max_len.max(min_len));
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}
