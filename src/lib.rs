//! # dynarray: Resizable Array with Pluggable Element Semantics
//!
//! This crate provides [`DynamicArray`], a growable array that owns its
//! elements and delegates how they are copied, compared and released to a
//! caller-supplied [`ElementOps`] capability set.
//!
//! ## Key Features
//!
//! - **Copy-in, copy-out**: elements are duplicated on append and on every read
//! - **Python-style positions**: `get(-1)` is the last element
//! - **Bulk removal**: `delete` removes every equal element in one stable pass
//! - **Automatic shrinking**: capacity halves once occupancy drops below a
//!   configurable minimum load factor, never below a minimum capacity
//! - **Configurable policy**: presets, environment variables and JSON files
//!   through [`config::DynamicArrayConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dynarray::{CloneOps, DynamicArray};
//!
//! let mut arr = DynamicArray::new(4, 0.25, CloneOps)?;
//! for i in 0..5 {
//!     arr.append(&i);
//! }
//! assert_eq!(arr.capacity(), 8);
//!
//! arr.delete_at(-1)?;
//! assert_eq!(arr.get(-1), Some(3));
//!
//! let copy = arr.deep_copy();
//! arr.clear();
//! assert_eq!(arr.capacity(), 4);
//! assert_eq!(copy.get_all(), Some(vec![0, 1, 2, 3]));
//! # Ok::<(), dynarray::DynArrayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use config::{Config, DynamicArrayConfig};
pub use containers::{CloneOps, DynamicArray, ElementOps, FnOps, ShrinkStrategy};
pub use error::{DynArrayError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing dynarray v{}", VERSION);
}
