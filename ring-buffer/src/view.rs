//! Forward and reverse views over a [`RingBuffer`].
//!
//! Both views walk the same relative-index space as `RingBuffer::get`, each
//! holding a logical position and an end sentinel fixed at creation. A view
//! is exhausted once its position reaches the sentinel, and stays exhausted.
//!
//! | view      | first position       | sentinel | order          |
//! |-----------|----------------------|----------|----------------|
//! | `Iter`    | `-(len - 1)` (oldest) | `1`      | oldest → newest |
//! | `RevIter` | `0` (newest)         | `len`    | newest → oldest |

use std::fmt;
use std::iter::FusedIterator;

use crate::position;
use crate::RingBuffer;

/// Oldest to newest iterator returned by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    pos: isize,
    end: isize,
}

impl<'a, T> Iter<'a, T> {
    const END: isize = 1;

    pub(crate) fn new(buffer: &'a RingBuffer<T>) -> Self {
        let pos = if buffer.is_empty() {
            Self::END
        } else {
            position::oldest_relative(buffer.len())
        };
        Self {
            buffer,
            pos,
            end: Self::END,
        }
    }

    /// Relative index of the element the next call to `next` yields.
    pub fn logical_position(&self) -> isize {
        self.pos
    }

    /// True once every element has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.is_exhausted() {
            return None;
        }
        let item = self.buffer.element_at(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.pos) as usize;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            pos: self.pos,
            end: self.end,
        }
    }
}

/// Views are equal when they walk the same buffer and sit at the same position.
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.buffer, other.buffer) && self.pos == other.pos
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish()
    }
}

/// Newest to oldest iterator returned by [`RingBuffer::iter_rev`].
pub struct RevIter<'a, T> {
    buffer: &'a RingBuffer<T>,
    pos: isize,
    end: isize,
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(buffer: &'a RingBuffer<T>) -> Self {
        Self {
            buffer,
            pos: 0,
            end: buffer.len() as isize,
        }
    }

    /// Relative index of the element the next call to `next` yields.
    pub fn logical_position(&self) -> isize {
        self.pos
    }

    /// True once every element has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.is_exhausted() {
            return None;
        }
        let item = self.buffer.element_at(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.pos) as usize;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<T> PartialEq for RevIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.buffer, other.buffer) && self.pos == other.pos
    }
}

impl<T> Eq for RevIter<'_, T> {}

impl<T> fmt::Debug for RevIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevIter")
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish()
    }
}
