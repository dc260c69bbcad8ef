//! A fixed-capacity ring buffer that overwrites the oldest element when full.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::error::{RingBufferError, RingBufferResult};
use crate::position;
use crate::view::{Iter, RevIter};

/// A fixed-capacity ring buffer that automatically overwrites the oldest
/// element when pushing to a full buffer.
///
/// Elements can be read in insertion order with [`iter`](Self::iter), in
/// reverse with [`iter_rev`](Self::iter_rev), or by age with relative
/// indexing: `buf[0]` is the newest element and `buf[buf.oldest()]` the
/// oldest.
///
/// The buffer is not synchronised. Views borrow it immutably, so the
/// compiler rejects any `push` while a view is alive.
#[derive(Clone)]
pub struct RingBuffer<T> {
    /// Backing slots, grows to `capacity` and is then overwritten in place
    data: Vec<T>,
    capacity: usize,
    /// Slot receiving the next pushed element
    cursor: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// # Errors
    /// Returns [`RingBufferError::InvalidCapacity`] if capacity is 0.
    pub fn new(capacity: usize) -> RingBufferResult<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }
        debug!("Created RingBuffer with capacity {capacity}");
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        })
    }

    /// Push a value onto the buffer, returning the overwritten oldest value
    /// if the buffer was already full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.data.len() < self.capacity {
            self.data.push(value);
            None
        } else {
            trace!("RingBuffer full, overwriting slot {}", self.cursor);
            Some(std::mem::replace(&mut self.data[self.cursor], value))
        };
        self.cursor = position::advance(self.cursor, self.capacity);
        evicted
    }

    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true once the buffer holds `capacity` elements.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Returns the maximum capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Relative index of the oldest element.
    ///
    /// Returns `0` for an empty buffer, which is also the index of the
    /// newest element of a non-empty one. Check [`is_empty`](Self::is_empty)
    /// first or use [`oldest_index`](Self::oldest_index).
    pub fn oldest(&self) -> isize {
        position::oldest_relative(self.len())
    }

    /// Relative index of the oldest element, `None` if the buffer is empty.
    pub fn oldest_index(&self) -> Option<isize> {
        (!self.is_empty()).then(|| self.oldest())
    }

    /// Element at relative index `index`.
    ///
    /// `0` is the newest element and `len - 1` the oldest. Negative indices
    /// run from `-len` (newest) through `-(len - 1)` (oldest) to `-1`
    /// (second newest), so `oldest()..=0` visits oldest to newest.
    ///
    /// # Errors
    /// [`RingBufferError::EmptyBufferAccess`] on an empty buffer,
    /// [`RingBufferError::IndexOutOfRange`] outside `-len..len`.
    pub fn get(&self, index: isize) -> RingBufferResult<&T> {
        let slot = position::resolve(self.cursor, self.len(), index)?;
        Ok(&self.data[slot])
    }

    /// Mutable access to the element at relative index `index`.
    ///
    /// Same addressing and errors as [`get`](Self::get).
    pub fn get_mut(&mut self, index: isize) -> RingBufferResult<&mut T> {
        let slot = position::resolve(self.cursor, self.len(), index)?;
        Ok(&mut self.data[slot])
    }

    /// Returns a reference to the oldest element, if any.
    pub fn front(&self) -> Option<&T> {
        self.oldest_index().and_then(|index| self.get(index).ok())
    }

    /// Returns a reference to the newest element, if any.
    pub fn back(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns an iterator over the elements in order (oldest to newest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the elements in reverse (newest to oldest).
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self)
    }

    /// Elements matching `predicate`, oldest to newest.
    pub fn select<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.iter().filter(move |item| predicate(item))
    }

    /// Element at a relative position the caller has already bounds-checked.
    pub(crate) fn element_at(&self, index: isize) -> &T {
        let len = self.len();
        let normalized = position::normalize_unchecked(index, len);
        &self.data[position::slot(self.cursor, len, normalized)]
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Collects elements into a Vec, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Index<isize> for RingBuffer<T> {
    type Output = T;

    /// # Panics
    /// Panics if the buffer is empty or `index` is out of range.
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for RingBuffer<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    /// Buffers are equal when they share a capacity and hold equal elements
    /// in the same order, regardless of where the cursor sits.
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
