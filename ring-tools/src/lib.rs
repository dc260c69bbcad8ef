//! Command line tools built on [`ring_buffer::RingBuffer`].
//!
//! - [`context_grep`]: grep with leading/trailing context kept in a ring buffer
//! - [`demo`]: prints a buffer through every read path

pub mod context_grep;
pub mod demo;

pub use context_grep::{ContextGrep, GrepError, GrepOptions};
