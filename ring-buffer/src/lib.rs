//! Fixed-capacity ring buffer with relative indexing and dual-order views.
//!
//! A [`RingBuffer`] holds at most `capacity` elements and overwrites the
//! oldest one on every push once full. Elements can be visited oldest to
//! newest ([`RingBuffer::iter`]), newest to oldest ([`RingBuffer::iter_rev`]),
//! or addressed by age through signed relative indices.
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(5)?;
//! buf.extend(0..12);
//!
//! assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [7, 8, 9, 10, 11]);
//! assert_eq!(buf.iter_rev().copied().collect::<Vec<_>>(), [11, 10, 9, 8, 7]);
//! assert_eq!(buf[0], 11);
//! assert_eq!(buf[buf.oldest()], 7);
//! # Ok::<(), ring_buffer::RingBufferError>(())
//! ```

pub mod error;
pub mod position;
mod ring_buffer;
pub mod view;

pub use error::{RingBufferError, RingBufferResult};
pub use ring_buffer::RingBuffer;
pub use view::{Iter, RevIter};
