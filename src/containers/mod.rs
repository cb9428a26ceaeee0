//! Container types
//!
//! - **`DynamicArray<T, O>`** - resizable array with load-factor driven shrinking
//! - **`ElementOps<T>`** - element copy/equality/destroy capability set, with
//!   the ready-made `CloneOps` and closure-backed `FnOps`
//! - **`capacity_policy`** - the growth and shrink arithmetic, usable on its own

pub mod capacity_policy;
mod dynamic_array;
mod element_ops;

pub use capacity_policy::{next_capacity, CapacityOp, ShrinkStrategy};
pub use dynamic_array::DynamicArray;
pub use element_ops::{CloneOps, ElementOps, FnOps};
