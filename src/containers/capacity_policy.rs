//! Capacity growth and shrink policy for [`DynamicArray`](super::DynamicArray)
//!
//! The arithmetic is kept free of any container state so it can be tested
//! on its own. Growth is plain doubling. Shrinking is driven by a minimum
//! load factor: once fewer than `floor(load_factor * capacity)` slots are
//! occupied, the backing store is halved, never below the configured
//! minimum capacity and never below the number of live elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DynArrayError;

/// How far a bulk removal is allowed to shrink the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShrinkStrategy {
    /// Halve once, then check for at most one further halving
    SingleExtraHalving,
    /// Keep halving while the load factor is still violated
    #[default]
    Fixpoint,
}

impl fmt::Display for ShrinkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleExtraHalving => f.write_str("single"),
            Self::Fixpoint => f.write_str("fixpoint"),
        }
    }
}

impl FromStr for ShrinkStrategy {
    type Err = DynArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_extra_halving" => Ok(Self::SingleExtraHalving),
            "fixpoint" | "loop" => Ok(Self::Fixpoint),
            other => Err(DynArrayError::configuration(format!(
                "unknown shrink strategy '{}', expected 'single' or 'fixpoint'",
                other
            ))),
        }
    }
}

/// The mutation a capacity decision is being made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityOp {
    /// About to insert one element
    Append,
    /// One element was removed by position
    RemoveAt,
    /// Any number of elements were removed by value
    RemoveMatching(ShrinkStrategy),
    /// Every element was removed
    Clear,
}

/// True when `size` live elements under-fill `capacity` slots.
///
/// The threshold is truncated towards zero, so with a load factor of 0.25
/// and a capacity of 4 nothing ever counts as under-filled.
#[inline]
pub fn below_load_factor(size: usize, min_load_factor: f64, capacity: usize) -> bool {
    size < (min_load_factor * capacity as f64) as usize
}

/// Capacity the backing store should have after (or, for [`CapacityOp::Append`],
/// before) the given mutation.
///
/// Returns `current` when no resize is needed, and also when the computed
/// target would be smaller than `size`: a resize never drops live elements.
pub fn next_capacity(
    current: usize,
    size: usize,
    min_capacity: usize,
    min_load_factor: f64,
    op: CapacityOp,
) -> usize {
    let should_shrink = current > min_capacity && below_load_factor(size, min_load_factor, current);

    let target = match op {
        CapacityOp::Append => {
            if size >= current {
                current.max(1).saturating_mul(2)
            } else {
                current
            }
        }
        CapacityOp::RemoveAt => {
            if should_shrink {
                current / 2
            } else {
                current
            }
        }
        CapacityOp::RemoveMatching(strategy) => {
            if should_shrink {
                halve_for_bulk_removal(current / 2, size, min_capacity, min_load_factor, strategy)
            } else {
                current
            }
        }
        CapacityOp::Clear => {
            if current > min_capacity {
                min_capacity
            } else {
                current
            }
        }
    };

    let target = target.max(min_capacity);
    if target < size {
        current
    } else {
        target
    }
}

fn halve_for_bulk_removal(
    mut capacity: usize,
    size: usize,
    min_capacity: usize,
    min_load_factor: f64,
    strategy: ShrinkStrategy,
) -> usize {
    match strategy {
        ShrinkStrategy::SingleExtraHalving => {
            if capacity > min_capacity && below_load_factor(size, min_load_factor, capacity) {
                capacity /= 2;
            }
        }
        ShrinkStrategy::Fixpoint => {
            while capacity > min_capacity
                && below_load_factor(size, min_load_factor, capacity)
                && capacity / 2 >= size
            {
                capacity /= 2;
            }
        }
    }
    capacity
}
