//! Capability contract for bounded containers
//!
//! A single explicit interface for what a bounded buffer can do — append,
//! count, bulk-copy, membership, forward iteration — with arbitrary
//! single-item removal rejected loudly instead of silently ignored.

use crate::errors::{Result, RingError};
use crate::ring::RingBuffer;

/// The capability set a bounded FIFO container exposes to generic
/// collection consumers.
///
/// Implementors are countable, forward-enumerable (snapshot-based),
/// bulk-copyable into an external slice, and insertable. They are
/// explicitly NOT arbitrarily removable: [`remove`](Self::remove) signals
/// [`RingError::Unsupported`] by default so callers treating the container
/// as a general collection get a clear contract violation, not a no-op.
pub trait BoundedCollection<T> {
    /// Append an element, subject to the container's capacity policy.
    fn add(&mut self, item: T) -> Result<()>;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone `n` live elements, oldest first, into `dest[dest_offset..]`.
    fn copy_to(&self, dest: &mut [T], dest_offset: usize, n: usize) -> Result<()>
    where
        T: Clone;

    /// Whether any live element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Iterate over live elements, oldest to newest.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Remove a single element by value.
    ///
    /// Bounded FIFO containers do not support this; the default
    /// implementation fails with [`RingError::Unsupported`].
    fn remove(&mut self, _item: &T) -> Result<()>
    where
        T: PartialEq,
    {
        Err(RingError::Unsupported {
            operation: "remove",
        })
    }
}

impl<T> BoundedCollection<T> for RingBuffer<T> {
    fn add(&mut self, item: T) -> Result<()> {
        RingBuffer::add(self, item)
    }

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn copy_to(&self, dest: &mut [T], dest_offset: usize, n: usize) -> Result<()>
    where
        T: Clone,
    {
        RingBuffer::copy_to(self, dest, dest_offset, n)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        RingBuffer::contains(self, item)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(RingBuffer::iter(self))
    }
}
