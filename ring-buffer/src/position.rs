//! Position arithmetic shared by insertion, relative indexing and the views.
//!
//! Relative indices address elements by age instead of physical slot:
//!
//! ```text
//! capacity 5, values 0..12 pushed, cursor = 2
//!
//! slot:       0    1    2    3    4
//! value:     10   11    7    8    9
//!                       ^ cursor (next write, currently the oldest)
//!
//! relative:  -1   -5   -4   -3   -2     (negative side)
//! relative:   1    0    4    3    2     (positive side)
//! ```
//!
//! Index `0` is always the newest element. Positive indices walk towards
//! older elements. Negative indices are normalised with `i' = -(len + i)` so
//! that `-(len - 1)` lands on the oldest element and `-len` on the newest.

use crate::error::{RingBufferError, RingBufferResult};

/// True mathematical modulo of `value` by `modulus`, always in `[0, modulus)`.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn wrap(value: isize, modulus: usize) -> usize {
    assert!(modulus > 0, "wrap modulus must be greater than 0");
    value.rem_euclid(modulus as isize) as usize
}

/// Slot following `cursor` in a store of `capacity` slots.
pub fn advance(cursor: usize, capacity: usize) -> usize {
    (cursor + 1) % capacity
}

/// Relative index of the oldest element, `0` for an empty buffer.
pub fn oldest_relative(len: usize) -> isize {
    if len == 0 {
        0
    } else {
        -(len as isize - 1)
    }
}

/// Validate a relative index against `len` readable elements and fold
/// negative indices onto the `i'` form used by [`slot`].
pub fn normalize(index: isize, len: usize) -> RingBufferResult<isize> {
    if len == 0 {
        return Err(RingBufferError::EmptyBufferAccess);
    }
    let len_signed = len as isize;
    if index >= len_signed || index < -len_signed {
        return Err(RingBufferError::IndexOutOfRange { index, len });
    }
    Ok(normalize_unchecked(index, len))
}

/// [`normalize`] without bounds checks, for positions already known valid.
pub(crate) fn normalize_unchecked(index: isize, len: usize) -> isize {
    if index < 0 {
        -(len as isize + index)
    } else {
        index
    }
}

/// Physical slot holding the element at normalised relative index `normalized`.
///
/// While the buffer is filling `cursor == len`, and once full `len` equals
/// the capacity, so wrapping by `len` covers both cases.
pub fn slot(cursor: usize, len: usize, normalized: isize) -> usize {
    wrap(cursor as isize - 1 - normalized, len)
}

/// Checked mapping from relative index to physical slot.
pub fn resolve(cursor: usize, len: usize, index: isize) -> RingBufferResult<usize> {
    let normalized = normalize(index, len)?;
    Ok(slot(cursor, len, normalized))
}
