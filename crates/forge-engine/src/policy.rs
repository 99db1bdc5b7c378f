//! Generation mode and tunable bounds.
//!
//! A [`ModePolicy`] carries everything tunable about a generation request:
//! per-kind numeric bounds, collection size bounds, probabilities, the
//! recursion depth cap, and the active [`GenerationMode`]. It is read-only
//! once generation starts; randomness comes from the RNG threaded through
//! the generation context, so concurrent requests can share one policy.

use crate::error::BuildError;
use forge_core::{Constraint, ConstraintKind, Definition, TypeCategory};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Policy axis selecting how constraints are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Generated values honor every recognized constraint declaration
    #[default]
    Satisfy,
    /// One recognized declaration per node is deliberately broken
    Violate,
    /// Every node takes its canonical zero/empty representation
    Zero,
    /// Unconstrained randomness with probabilistic absence
    Chaotic,
}

/// Bounds and mode for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModePolicy {
    /// Active generation mode
    pub mode: GenerationMode,

    /// Minimum generated i32
    pub min_int: i32,
    /// Maximum generated i32 (inclusive)
    pub max_int: i32,

    /// Minimum generated i64
    pub min_big_int: i64,
    /// Maximum generated i64 (inclusive)
    pub max_big_int: i64,

    /// Minimum generated f64
    pub min_float: f64,
    /// Maximum generated f64 (inclusive)
    pub max_float: f64,

    /// Minimum generated text length (characters)
    pub min_text_len: usize,
    /// Maximum generated text length (characters)
    pub max_text_len: usize,

    /// Minimum collection/array/map size
    pub min_size: usize,
    /// Maximum collection/array/map size
    pub max_size: usize,

    /// Probability that a generated boolean is true
    pub true_probability: f64,

    /// Probability that a non-primitive node is absent under chaotic mode
    pub null_probability: f64,

    /// Recursion depth cap; nodes past it take their zero representation
    pub max_depth: usize,
}

impl Default for ModePolicy {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            min_int: 0,
            max_int: 100,
            min_big_int: 0,
            max_big_int: 100,
            min_float: 0.0,
            max_float: 100.0,
            min_text_len: 1,
            max_text_len: 16,
            min_size: 0,
            max_size: 3,
            true_probability: 0.5,
            null_probability: 0.25,
            max_depth: 8,
        }
    }
}

impl ModePolicy {
    /// Default bounds under a given mode.
    pub fn with_mode(mode: GenerationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Check the min/max and probability invariants.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.min_int > self.max_int {
            return Err(BuildError::InvalidPolicy("min_int > max_int".into()));
        }
        if self.min_big_int > self.max_big_int {
            return Err(BuildError::InvalidPolicy("min_big_int > max_big_int".into()));
        }
        if self.min_float > self.max_float {
            return Err(BuildError::InvalidPolicy("min_float > max_float".into()));
        }
        if self.min_text_len > self.max_text_len {
            return Err(BuildError::InvalidPolicy("min_text_len > max_text_len".into()));
        }
        if self.min_size > self.max_size {
            return Err(BuildError::InvalidPolicy("min_size > max_size".into()));
        }
        if !(0.0..=1.0).contains(&self.true_probability) {
            return Err(BuildError::InvalidPolicy(
                "true_probability outside [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.null_probability) {
            return Err(BuildError::InvalidPolicy(
                "null_probability outside [0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// Should this node be absent?
    ///
    /// Only chaotic mode draws absence here, and only for non-primitive
    /// categories; primitives fall back to their zero value instead of
    /// disappearing. Satisfy/violate leave presence to the constraint
    /// processor chain.
    pub fn is_absent<R: Rng>(&self, definition: &Definition, rng: &mut R) -> bool {
        if self.mode != GenerationMode::Chaotic {
            return false;
        }
        match definition.category {
            TypeCategory::Primitive | TypeCategory::Temporal | TypeCategory::Domain => false,
            TypeCategory::Array
            | TypeCategory::Collection
            | TypeCategory::Map
            | TypeCategory::Object => rng.gen_bool(self.null_probability),
        }
    }

    /// How many elements should a container node hold?
    ///
    /// Zero mode takes the minimum bound; other modes draw uniformly from
    /// the policy bounds, unless a size declaration on the node overrides
    /// them under satisfy/violate.
    pub fn size_of<R: Rng>(&self, definition: &Definition, rng: &mut R) -> usize {
        let (mut min, mut max) = (self.min_size, self.max_size);

        if matches!(self.mode, GenerationMode::Satisfy | GenerationMode::Violate) {
            if let Some(Constraint::Size {
                min: bound_min,
                max: bound_max,
            }) = definition.constraint(ConstraintKind::Size)
            {
                min = *bound_min;
                max = *bound_max;
            }
        }

        match self.mode {
            GenerationMode::Zero => min,
            _ => rng.gen_range(min..=max.max(min)),
        }
    }
}
