//! Unit tests for the collection module
//!
//! Tests cover:
//! - The BoundedCollection capability surface on RingBuffer
//! - Generic consumption through the trait
//! - Explicit rejection of single-item removal

use cyclebuf::{BoundedCollection, RingBuffer, RingError};

fn fill<C: BoundedCollection<i32>>(collection: &mut C, values: &[i32]) {
    for &value in values {
        collection.add(value).unwrap();
    }
}

#[test]
fn test_generic_consumer_sees_fifo_order() {
    let mut buf = RingBuffer::new(4);
    fill(&mut buf, &[10, 20, 30]);
    let listed: Vec<i32> = BoundedCollection::iter(&buf).copied().collect();
    assert_eq!(listed, vec![10, 20, 30]);
    assert_eq!(BoundedCollection::len(&buf), 3);
    assert!(!BoundedCollection::is_empty(&buf));
}

#[test]
fn test_trait_copy_to_matches_inherent() {
    let mut buf = RingBuffer::new(3);
    fill(&mut buf, &[1, 2, 3]);
    let mut via_trait = [0; 3];
    BoundedCollection::copy_to(&buf, &mut via_trait, 0, 3).unwrap();
    assert_eq!(via_trait.to_vec(), buf.to_array());
}

#[test]
fn test_trait_contains() {
    let mut buf = RingBuffer::new(2);
    fill(&mut buf, &[5, 6]);
    assert!(BoundedCollection::contains(&buf, &6));
    assert!(!BoundedCollection::contains(&buf, &7));
}

#[test]
fn test_remove_signals_unsupported() {
    let mut buf = RingBuffer::new(2);
    fill(&mut buf, &[1]);
    let err = buf.remove(&1).unwrap_err();
    assert_eq!(err, RingError::Unsupported { operation: "remove" });
    // The rejected removal must not mutate the buffer.
    assert_eq!(buf.to_array(), vec![1]);
}

#[test]
fn test_trait_add_respects_capacity_policy() {
    let mut strict: RingBuffer<i32> = RingBuffer::with_overwrite(1, false);
    BoundedCollection::add(&mut strict, 1).unwrap();
    assert_eq!(
        BoundedCollection::add(&mut strict, 2),
        Err(RingError::CapacityExceeded { capacity: 1 })
    );
}
