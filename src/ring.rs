//! Fixed-capacity ring buffer
//!
//! A FIFO sequence backed by a single contiguous store, with an explicit
//! overwrite-on-full policy, removal from either end, non-destructive
//! offset peeking, bulk transfer, and capacity reassignment that preserves
//! logical order.

use tracing::{debug, trace};

use crate::errors::{Result, RingError};

/// A fixed-capacity circular FIFO container.
///
/// Elements live in a contiguous store addressed with wraparound indexing:
/// the logical element at position `i` resides at physical index
/// `(head + i) % capacity`. When the buffer is full, `add` either drops the
/// oldest element (`allow_overwrite == true`, the default) or fails with
/// [`RingError::CapacityExceeded`].
///
/// The container performs no internal locking. Concurrent producer/consumer
/// use must go through a caller-owned mutex or a single-writer discipline.
///
/// ```
/// use cyclebuf::RingBuffer;
///
/// let mut buf = RingBuffer::new(3);
/// buf.add(1).unwrap();
/// buf.add(2).unwrap();
/// buf.add(3).unwrap();
/// buf.add(4).unwrap(); // full: 1 is dropped
/// assert_eq!(buf.to_array(), vec![2, 3, 4]);
/// ```
pub struct RingBuffer<T> {
    store: Vec<Option<T>>,
    capacity: usize,
    allow_overwrite: bool,
    /// Index of the oldest logical element.
    head: usize,
    /// Index of the next slot to be written.
    tail: usize,
    /// Number of live logical elements.
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Create a buffer with the given capacity and overwrite enabled.
    ///
    /// A capacity of 0 is legal; every read and write on such a buffer
    /// fails cleanly until [`set_capacity`](Self::set_capacity) grows it.
    pub fn new(capacity: usize) -> Self {
        Self::with_overwrite(capacity, true)
    }

    /// Create a buffer with an explicit overwrite policy.
    pub fn with_overwrite(capacity: usize, allow_overwrite: bool) -> Self {
        Self {
            store: Self::fresh_store(capacity),
            capacity,
            allow_overwrite,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    fn fresh_store(capacity: usize) -> Vec<Option<T>> {
        let mut store = Vec::with_capacity(capacity);
        store.resize_with(capacity, || None);
        store
    }

    /// Whether a full buffer overwrites its oldest element on `add`.
    pub fn allow_overwrite(&self) -> bool {
        self.allow_overwrite
    }

    /// Change the overwrite policy. Takes effect on the next `add`.
    pub fn set_allow_overwrite(&mut self, allow: bool) {
        self.allow_overwrite = allow;
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Current maximum number of live elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the buffer can accept no further element.
    ///
    /// With overwrite enabled a buffer is never "full" in this sense: `add`
    /// always succeeds by dropping the oldest element.
    pub fn is_full(&self) -> bool {
        !self.allow_overwrite && self.count == self.capacity
    }

    /// Append an element at the tail.
    ///
    /// On a full buffer this either drops the oldest element (overwrite
    /// enabled) or fails with [`RingError::CapacityExceeded`] without
    /// mutating anything.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.count == self.capacity {
            if !self.allow_overwrite || self.capacity == 0 {
                return Err(RingError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            // Write cursor has wrapped onto the read cursor: drop the
            // oldest element by advancing head in lockstep.
            trace!(capacity = self.capacity, "overwriting oldest element");
            self.store[self.tail] = Some(item);
            self.tail = (self.tail + 1) % self.capacity;
            self.head = (self.head + 1) % self.capacity;
            return Ok(());
        }
        self.store[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity;
        self.count += 1;
        Ok(())
    }

    /// Append every element of `items`, returning how many were written.
    ///
    /// Without overwrite the free space is checked up front: if `items`
    /// does not fit, the call fails and the buffer is left entirely
    /// unmodified. With overwrite the oldest elements are dropped as
    /// needed.
    pub fn add_range(&mut self, items: impl IntoIterator<Item = T>) -> Result<usize> {
        let items: Vec<T> = items.into_iter().collect();
        if !self.allow_overwrite && items.len() > self.capacity - self.count {
            return Err(RingError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let written = items.len();
        for item in items {
            self.add(item)?;
        }
        Ok(written)
    }

    /// Remove and return the oldest element.
    pub fn take_front(&mut self) -> Result<T> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        let item = self.store[self.head]
            .take()
            .ok_or(RingError::Empty)?;
        self.head = (self.head + 1) % self.capacity;
        self.count -= 1;
        Ok(item)
    }

    /// Remove up to `n` elements from the front, oldest first.
    pub fn take_front_n(&mut self, n: usize) -> Vec<T> {
        let take = n.min(self.count);
        let mut out = Vec::with_capacity(take);
        for _ in 0..take {
            match self.take_front() {
                Ok(item) => out.push(item),
                Err(_) => break,
            }
        }
        out
    }

    /// Remove and return the most recently added element.
    pub fn take_back(&mut self) -> Result<T> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        let idx = (self.tail + self.capacity - 1) % self.capacity;
        let item = self.store[idx].take().ok_or(RingError::Empty)?;
        self.tail = idx;
        self.count -= 1;
        if self.count == 0 {
            // Cursors rejoin at zero instead of drifting backwards.
            self.head = 0;
            self.tail = 0;
        }
        Ok(item)
    }

    /// Advance the read cursor by `n` slots without touching `len`.
    ///
    /// Caveat: this moves `head` but does not decrement the live count, so
    /// a subsequent length-dependent read can observe slots behind the
    /// write cursor. Callers that want true discard semantics should use
    /// [`take_front_n`](Self::take_front_n) instead.
    pub fn skip(&mut self, n: usize) {
        if self.capacity == 0 {
            return;
        }
        self.head = (self.head + n) % self.capacity;
    }

    /// Reference to the oldest element without removing it.
    pub fn peek_front(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        self.store[self.head].as_ref().ok_or(RingError::Empty)
    }

    /// Reference to the most recently added element without removing it.
    pub fn peek_back(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        let idx = (self.tail + self.capacity - 1) % self.capacity;
        self.store[idx].as_ref().ok_or(RingError::Empty)
    }

    /// Reference to the element at logical `offset` from the front.
    ///
    /// Offsets at or past the live count are rejected rather than wrapping
    /// into stale slots.
    pub fn peek_at(&self, offset: usize) -> Result<&T> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        if offset >= self.count {
            return Err(RingError::InvalidArgument {
                message: format!("offset {offset} out of range for {} live elements", self.count),
            });
        }
        let idx = (self.head + offset) % self.capacity;
        self.store[idx].as_ref().ok_or(RingError::Empty)
    }

    /// Clone the front `n` elements in logical order without removing them.
    pub fn peek_n(&self, n: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        if n > self.count {
            return Err(RingError::InvalidArgument {
                message: format!("requested {n} elements but only {} are live", self.count),
            });
        }
        let mut out = Vec::with_capacity(n);
        for offset in 0..n {
            out.push(self.peek_at(offset)?.clone());
        }
        Ok(out)
    }

    /// Clone `n` live elements, starting at the front, into
    /// `dest[dest_offset..dest_offset + n]`.
    pub fn copy_to(&self, dest: &mut [T], dest_offset: usize, n: usize) -> Result<()>
    where
        T: Clone,
    {
        if n > self.count {
            return Err(RingError::InvalidArgument {
                message: format!("requested {n} elements but only {} are live", self.count),
            });
        }
        let end = dest_offset
            .checked_add(n)
            .filter(|&end| end <= dest.len())
            .ok_or_else(|| RingError::InvalidArgument {
                message: format!(
                    "destination range {dest_offset}..{dest_offset}+{n} out of bounds for length {}",
                    dest.len()
                ),
            })?;
        for (slot, offset) in dest[dest_offset..end].iter_mut().zip(0..n) {
            *slot = self.peek_at(offset)?.clone();
        }
        Ok(())
    }

    /// All live elements in logical order as a freshly allocated vector.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Whether any live element equals `item`. O(n) over the logical window.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == item)
    }

    /// Reassign the capacity, preserving live elements in logical order.
    ///
    /// The new store starts with the oldest element at physical index 0.
    /// Shrinking below the live count fails with
    /// [`RingError::InvalidCapacity`] and leaves the buffer unchanged.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.count {
            return Err(RingError::InvalidCapacity {
                requested: new_capacity,
                live: self.count,
            });
        }
        debug!(
            old = self.capacity,
            new = new_capacity,
            live = self.count,
            "reassigning ring buffer capacity"
        );
        let mut store = Self::fresh_store(new_capacity);
        for (slot, offset) in store.iter_mut().zip(0..self.count) {
            let idx = (self.head + offset) % self.capacity;
            *slot = self.store[idx].take();
        }
        self.store = store;
        self.capacity = new_capacity;
        self.head = 0;
        self.tail = if new_capacity == 0 { 0 } else { self.count % new_capacity };
        Ok(())
    }

    /// Drop every element and reset the cursors.
    ///
    /// The store is reallocated so previously held elements are released
    /// immediately rather than lingering in stale slots.
    pub fn clear(&mut self) {
        debug!(dropped = self.count, "clearing ring buffer");
        self.store = Self::fresh_store(self.capacity);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterate from oldest to newest.
    ///
    /// The start index and length are captured when the iterator is
    /// created; each call to `iter` yields a fresh traversal of exactly
    /// `len` elements, wrapping the physical boundary at most once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self,
            pos: self.head,
            remaining: self.count,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("len", &self.count)
            .field("allow_overwrite", &self.allow_overwrite)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Snapshot iterator over a [`RingBuffer`], oldest to newest.
pub struct Iter<'a, T> {
    buf: &'a RingBuffer<T>,
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buf.store[self.pos].as_ref();
        self.pos = (self.pos + 1) % self.buf.capacity;
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
