//! End-to-end scenarios for DynamicArray
//!
//! These pin the exact capacity arithmetic so that changes to the growth or
//! shrink policy show up as test failures.

use dynarray::config::{Config, DynamicArrayConfig};
use dynarray::containers::{next_capacity, CapacityOp, CloneOps, DynamicArray, ElementOps, FnOps, ShrinkStrategy};
use dynarray::DynArrayError;
use std::cell::RefCell;
use std::rc::Rc;

/// Heap-allocated record, compared by key only
#[derive(Debug, Clone)]
struct Record {
    key: u32,
    payload: Vec<u8>,
}

struct RecordOps {
    released: Rc<RefCell<Vec<u32>>>,
}

impl ElementOps<Record> for RecordOps {
    fn copy(&self, element: &Record) -> Record {
        element.clone()
    }

    fn equals(&self, a: &Record, b: &Record) -> bool {
        a.key == b.key
    }

    fn destroy(&self, element: Record) {
        self.released.borrow_mut().push(element.key);
    }
}

fn record(key: u32) -> Record {
    Record { key, payload: vec![key as u8; 16] }
}

#[test]
fn grow_then_shrink_minimum_four_quarter_load() {
    let mut arr = DynamicArray::new(4, 0.25, CloneOps).unwrap();
    for i in 1..=5 {
        arr.append(&i);
    }
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.len(), 5);

    // Sizes 4, 3 and 2 are not below floor(0.25 * 8) = 2
    for v in 1..=3 {
        assert!(arr.delete(&v));
        assert_eq!(arr.capacity(), 8);
    }

    // Size 1 < 2: halve to 4, then 1 < floor(0.25 * 4) = 1 is false, stop
    assert!(arr.delete(&4));
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.capacity(), 4);
    assert_eq!(arr.get_all(), Some(vec![5]));
}

#[test]
fn empty_array_rejects_positions() {
    let mut arr: DynamicArray<u64> = DynamicArray::new(4, 0.25, CloneOps).unwrap();

    assert_eq!(arr.get(0), None);
    let err = arr.delete_at(-1).unwrap_err();
    assert!(matches!(err, DynArrayError::OutOfBounds { index: -1, size: 0 }));
    assert_eq!(err.category(), "bounds");
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn bulk_delete_strategy_divergence() {
    for (strategy, expected) in [
        (ShrinkStrategy::SingleExtraHalving, 16),
        (ShrinkStrategy::Fixpoint, 4),
    ] {
        let config = DynamicArrayConfig::builder()
            .minimum_capacity(1)
            .minimum_load_factor(0.25)
            .shrink_strategy(strategy)
            .build()
            .unwrap();
        let mut arr = DynamicArray::with_config(config, CloneOps).unwrap();
        for _ in 0..32 {
            arr.append(&'x');
        }
        arr.append(&'y');
        assert_eq!(arr.capacity(), 64);

        assert!(arr.delete(&'x'));
        assert_eq!(arr.capacity(), expected, "strategy {}", strategy);
        assert_eq!(arr.get_all(), Some(vec!['y']));
    }
}

#[test]
fn policy_function_matches_container() {
    let mut arr = DynamicArray::new(3, 0.3, CloneOps).unwrap();
    let mut capacity = 3;

    for i in 0..50u32 {
        capacity = next_capacity(capacity, i as usize, 3, 0.3, CapacityOp::Append);
        arr.append(&i);
        assert_eq!(arr.capacity(), capacity);
    }

    while !arr.is_empty() {
        arr.delete_at(0).unwrap();
        capacity = next_capacity(capacity, arr.len(), 3, 0.3, CapacityOp::RemoveAt);
        assert_eq!(arr.capacity(), capacity);
        assert!(arr.capacity() >= 3);
    }
}

#[test]
fn records_are_released_once() {
    let released = Rc::new(RefCell::new(Vec::new()));
    let ops = RecordOps { released: released.clone() };
    let mut arr = DynamicArray::new(2, 0.25, ops).unwrap();

    for key in [1, 2, 3, 2, 4] {
        arr.append(&record(key));
    }

    // Equality ignores the payload
    let probe = Record { key: 2, payload: Vec::new() };
    assert_eq!(arr.find_all(&probe), vec![1, 3]);
    assert!(arr.delete(&probe));
    assert_eq!(*released.borrow(), vec![2, 2]);

    let fetched = arr.get(-1).unwrap();
    assert_eq!(fetched.key, 4);
    assert_eq!(fetched.payload, vec![4u8; 16]);

    arr.delete_at(0).unwrap();
    assert_eq!(*released.borrow(), vec![2, 2, 1]);

    drop(arr);
    assert_eq!(*released.borrow(), vec![2, 2, 1, 3, 4]);
}

#[test]
fn deep_copy_shares_callbacks_not_elements() {
    let released = Rc::new(RefCell::new(Vec::new()));
    let on_destroy = released.clone();
    let ops = FnOps::new(
        |s: &String| s.clone(),
        |a: &String, b: &String| a == b,
        move |s: String| on_destroy.borrow_mut().push(s),
    );

    let mut source = DynamicArray::new(4, 0.25, ops).unwrap();
    source.append(&"a".to_string());
    source.append(&"b".to_string());

    let mut copy = source.clone();
    copy.append(&"c".to_string());
    copy.clear();

    assert_eq!(*released.borrow(), vec!["a", "b", "c"]);
    assert_eq!(source.get_all().unwrap(), vec!["a", "b"]);
    assert_eq!(copy.minimum_capacity(), source.minimum_capacity());
    assert_eq!(copy.minimum_load_factor(), source.minimum_load_factor());
}

#[test]
fn clear_resets_to_configured_floor() {
    let config = DynamicArrayConfig::memory_preset();
    let mut arr = DynamicArray::with_config(config.clone(), CloneOps).unwrap();
    for i in 0..1000 {
        arr.append(&i);
    }
    assert_eq!(arr.capacity(), 1024);

    arr.clear();
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), config.minimum_capacity);

    // Clearing an empty array at the floor is a no-op
    arr.clear();
    assert_eq!(arr.capacity(), config.minimum_capacity);
}

#[test]
fn require_delete_reports_not_found() {
    let mut arr = DynamicArray::new(4, 0.25, CloneOps).unwrap();
    arr.append(&10);

    let err = arr.require_delete(&11).unwrap_err();
    assert_eq!(err.category(), "not_found");
    assert!(arr.require_delete(&10).is_ok());
    assert!(arr.is_empty());
}
