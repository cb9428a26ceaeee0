//! DynamicArray: resizable array with pluggable element semantics
//!
//! The container owns every element it stores. Elements are duplicated on the
//! way in and on the way out through the array's [`ElementOps`], so callers
//! never hold a reference into the backing store. Capacity doubles when the
//! array is full and halves when occupancy falls below the configured minimum
//! load factor, see [`capacity_policy`](super::capacity_policy).

use super::capacity_policy::{next_capacity, CapacityOp, ShrinkStrategy};
use super::element_ops::{CloneOps, ElementOps};
use crate::config::{Config, DynamicArrayConfig};
use crate::error::{check_position, DynArrayError, Result};
use std::fmt;
use std::iter;
use std::sync::Arc;

/// Resizable array whose element semantics are supplied at construction
///
/// Positions accepted by [`get`](Self::get) and [`delete_at`](Self::delete_at)
/// may be negative: `-1` is the last element, `-len` the first.
///
/// # Examples
///
/// ```rust
/// use dynarray::containers::{CloneOps, DynamicArray};
///
/// let mut arr = DynamicArray::new(4, 0.25, CloneOps)?;
/// for word in ["alpha", "beta", "gamma", "beta", "delta"] {
///     arr.append(&word.to_string());
/// }
/// assert_eq!(arr.len(), 5);
/// assert_eq!(arr.capacity(), 8);
///
/// assert!(arr.delete(&"beta".to_string()));
/// assert_eq!(arr.get(-1).as_deref(), Some("delta"));
/// assert_eq!(arr.get_all().unwrap(), vec!["alpha", "gamma", "delta"]);
/// # Ok::<(), dynarray::DynArrayError>(())
/// ```
pub struct DynamicArray<T, O: ElementOps<T> = CloneOps> {
    /// Backing store, one slot per unit of capacity; `Some` exactly in `[0, len)`
    slots: Box<[Option<T>]>,
    /// Number of live elements
    len: usize,
    /// Capacity policy, fixed at construction
    config: DynamicArrayConfig,
    /// Element semantics, shared with every deep copy
    ops: Arc<O>,
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T, O: ElementOps<T>> DynamicArray<T, O> {
    /// Create an empty array holding `minimum_capacity` vacant slots
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::Configuration` if `minimum_capacity` is zero or
    /// `minimum_load_factor` is outside `(0, 1)`.
    pub fn new(minimum_capacity: usize, minimum_load_factor: f64, ops: O) -> Result<Self> {
        let config = DynamicArrayConfig::new(minimum_capacity, minimum_load_factor)?;
        Self::with_config(config, ops)
    }

    /// Create an empty array from a full configuration
    pub fn with_config(config: DynamicArrayConfig, ops: O) -> Result<Self> {
        Self::with_shared_ops(config, Arc::new(ops))
    }

    /// Create an empty array that shares an existing capability set
    pub fn with_shared_ops(config: DynamicArrayConfig, ops: Arc<O>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            slots: vacant_slots(config.minimum_capacity),
            len: 0,
            config,
            ops,
        })
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Capacity floor
    #[inline]
    pub fn minimum_capacity(&self) -> usize {
        self.config.minimum_capacity
    }

    /// Occupancy fraction below which the backing store shrinks
    #[inline]
    pub fn minimum_load_factor(&self) -> f64 {
        self.config.minimum_load_factor
    }

    /// Shrink strategy used by [`delete`](Self::delete)
    #[inline]
    pub fn shrink_strategy(&self) -> ShrinkStrategy {
        self.config.shrink_strategy
    }

    /// The capacity policy this array was built with
    pub fn config(&self) -> &DynamicArrayConfig {
        &self.config
    }

    /// The capability set, shared with every deep copy of this array
    pub fn ops(&self) -> &Arc<O> {
        &self.ops
    }

    /// Append a copy of `element`, doubling the capacity first if the array is full
    pub fn append(&mut self, element: &T) {
        self.apply_capacity(CapacityOp::Append);

        let copy = self.ops.copy(element);
        self.slots[self.len] = Some(copy);
        self.len += 1;
    }

    /// Remove every element equal to `element`
    ///
    /// Survivors keep their relative order. Returns `false` and leaves the
    /// array untouched when nothing matched; otherwise the capacity is
    /// re-evaluated with the configured [`ShrinkStrategy`].
    pub fn delete(&mut self, element: &T) -> bool {
        let mut deletions = 0;

        for i in 0..self.len {
            let matched = matches!(&self.slots[i], Some(live) if self.ops.equals(live, element));

            if matched {
                if let Some(removed) = self.slots[i].take() {
                    self.ops.destroy(removed);
                }
                deletions += 1;
            } else if deletions > 0 {
                // slot i - deletions was vacated above
                self.slots.swap(i - deletions, i);
            }
        }

        if deletions == 0 {
            return false;
        }

        self.len -= deletions;
        self.apply_capacity(CapacityOp::RemoveMatching(self.config.shrink_strategy));
        true
    }

    /// Like [`delete`](Self::delete), but reports a miss as `DynArrayError::NotFound`
    pub fn require_delete(&mut self, element: &T) -> Result<()> {
        if self.delete(element) {
            Ok(())
        } else {
            Err(DynArrayError::not_found("no element compared equal in delete"))
        }
    }

    /// Remove the element at `pos`, shifting the tail left by one
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfBounds` if `pos` is outside
    /// `[-len, len - 1]`; the array is not modified.
    pub fn delete_at(&mut self, pos: isize) -> Result<()> {
        let index = check_position(pos, self.len)?;

        if let Some(removed) = self.slots[index].take() {
            self.ops.destroy(removed);
        }
        // Moves the vacated slot to the end of the live range
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        self.apply_capacity(CapacityOp::RemoveAt);
        Ok(())
    }

    /// Remove every element and fall back to the minimum capacity
    pub fn clear(&mut self) {
        self.release_live();
        self.apply_capacity(CapacityOp::Clear);
    }

    /// Check whether any element equals `element`
    pub fn find(&self, element: &T) -> bool {
        self.live().any(|live| self.ops.equals(live, element))
    }

    /// Positions of every element equal to `element`, in ascending order
    pub fn find_all(&self, element: &T) -> Vec<usize> {
        self.live()
            .enumerate()
            .filter(|(_, live)| self.ops.equals(live, element))
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy of the element at `pos`, or `None` if `pos` is out of bounds
    pub fn get(&self, pos: isize) -> Option<T> {
        let index = check_position(pos, self.len).ok()?;
        self.slots[index].as_ref().map(|live| self.ops.copy(live))
    }

    /// Copies of all elements in order, or `None` if the array is empty
    pub fn get_all(&self) -> Option<Vec<T>> {
        if self.is_empty() {
            return None;
        }

        Some(self.live().map(|live| self.ops.copy(live)).collect())
    }

    /// Independent copy with duplicated elements
    ///
    /// The copy has the same length, capacity and policy, and shares this
    /// array's capability set.
    pub fn deep_copy(&self) -> Self {
        let mut slots = vacant_slots(self.capacity());
        for (slot, live) in slots.iter_mut().zip(self.live()) {
            *slot = Some(self.ops.copy(live));
        }

        Self {
            slots,
            len: self.len,
            config: self.config.clone(),
            ops: Arc::clone(&self.ops),
        }
    }

    #[inline]
    fn live(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    fn release_live(&mut self) {
        for slot in &mut self.slots[..self.len] {
            if let Some(element) = slot.take() {
                self.ops.destroy(element);
            }
        }
        self.len = 0;
    }

    fn apply_capacity(&mut self, op: CapacityOp) {
        let current = self.capacity();
        let target = next_capacity(
            current,
            self.len,
            self.config.minimum_capacity,
            self.config.minimum_load_factor,
            op,
        );

        if target != current {
            self.change_capacity(target);
        }
    }

    /// Move the live elements into a fresh backing store of `new_capacity` slots
    fn change_capacity(&mut self, new_capacity: usize) {
        if new_capacity < self.len {
            log::debug!(
                "Refusing to resize DynamicArray to {} slots with {} live elements",
                new_capacity, self.len
            );
            return;
        }

        let mut slots = vacant_slots(new_capacity);
        for (new_slot, old_slot) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *new_slot = old_slot.take();
        }

        log::trace!(
            "DynamicArray resized from {} to {} slots ({} live)",
            self.capacity(), new_capacity, self.len
        );
        self.slots = slots;
    }
}

impl<T: Clone + PartialEq> Default for DynamicArray<T, CloneOps> {
    fn default() -> Self {
        let config = DynamicArrayConfig::default();
        Self {
            slots: vacant_slots(config.minimum_capacity),
            len: 0,
            config,
            ops: Arc::new(CloneOps),
        }
    }
}

impl<T, O: ElementOps<T>> Drop for DynamicArray<T, O> {
    fn drop(&mut self) {
        self.release_live();
    }
}

impl<T, O: ElementOps<T>> Clone for DynamicArray<T, O> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T, O: ElementOps<T>> PartialEq for DynamicArray<T, O> {
    /// Element-wise comparison through this array's `equals`
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.live().zip(other.live()).all(|(a, b)| self.ops.equals(a, b))
    }
}

impl<T: fmt::Debug, O: ElementOps<T>> fmt::Debug for DynamicArray<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.live().collect::<Vec<_>>())
            .finish()
    }
}
