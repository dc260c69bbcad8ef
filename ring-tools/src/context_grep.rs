//! Line filter that prints regular expression matches with surrounding context.
//!
//! Leading context comes from a ring buffer of the most recent lines, each
//! tagged with whether it has already been printed so overlapping context
//! windows never repeat a line. Trailing context is a simple countdown.
//!
//! Input is read as raw bytes; invalid UTF-8 is replaced with U+FFFD rather
//! than aborting the scan.

use std::io::{self, BufRead, Write};

use log::debug;
use regex::Regex;
use ring_buffer::{RingBuffer, RingBufferError};
use thiserror::Error;

/// Errors raised while building or running a [`ContextGrep`]
#[derive(Error, Debug)]
pub enum GrepError {
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line buffer error: {0}")]
    Buffer(#[from] RingBufferError),
}

/// Context options, mirroring grep's `-A`, `-B`, `-C` and a location prefix
///
/// Widths are `u16`, which bounds the look-back buffer at 131071 lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrepOptions {
    /// Lines of context printed after each match
    pub after: u16,
    /// Lines of context printed before each match
    pub before: u16,
    /// Lines of context on both sides; the larger value wins per side
    pub context: u16,
    /// Prefix printed lines with `name:line_number `
    pub show_location: bool,
}

impl GrepOptions {
    /// Leading context after resolving `context` against `before`.
    pub fn effective_before(&self) -> usize {
        usize::from(self.before.max(self.context))
    }

    /// Trailing context after resolving `context` against `after`.
    pub fn effective_after(&self) -> usize {
        usize::from(self.after.max(self.context))
    }
}

/// A recently read line and whether it has been written out
#[derive(Debug, Clone)]
struct ContextLine {
    number: usize,
    text: String,
    printed: bool,
}

/// Compiled pattern plus resolved context widths
#[derive(Debug, Clone)]
pub struct ContextGrep {
    pattern: Regex,
    before: usize,
    after: usize,
    show_location: bool,
}

impl ContextGrep {
    /// Compile `pattern` and resolve the context options.
    pub fn new(pattern: &str, options: GrepOptions) -> Result<Self, GrepError> {
        let pattern = Regex::new(pattern)?;
        Ok(Self {
            pattern,
            before: options.effective_before(),
            after: options.effective_after(),
            show_location: options.show_location,
        })
    }

    /// Number of lines kept in the look-back buffer.
    pub fn window(&self) -> usize {
        self.before + self.after + 1
    }

    /// Scan `reader` line by line, writing matches and their context to `out`.
    ///
    /// `name` is only used for the location prefix. Returns the number of
    /// matching lines.
    pub fn scan<R: BufRead, W: Write>(
        &self,
        name: &str,
        mut reader: R,
        out: &mut W,
    ) -> Result<usize, GrepError> {
        let mut lines = RingBuffer::new(self.window())?;
        let mut trailing = 0usize;
        let mut matches = 0usize;

        let mut raw = Vec::new();
        let mut number = 0usize;

        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            number += 1;
            let text = decode_line(&raw);
            let is_match = self.pattern.is_match(&text);
            lines.push(ContextLine {
                number,
                text,
                printed: false,
            });

            if is_match {
                matches += 1;
                // 0 is the matching line itself
                let reach = self.before.min(lines.len() - 1) as isize;
                for n in (0..=reach).rev() {
                    let entry = lines.get_mut(n)?;
                    if !entry.printed {
                        self.emit(out, name, entry)?;
                        entry.printed = true;
                    }
                }
                trailing = self.after;
            } else if trailing > 0 {
                trailing -= 1;
                let entry = lines.get_mut(0)?;
                self.emit(out, name, entry)?;
                entry.printed = true;
            }
        }

        debug!("{name}: {matches} matching lines");
        Ok(matches)
    }

    fn emit<W: Write>(&self, out: &mut W, name: &str, line: &ContextLine) -> io::Result<()> {
        if self.show_location {
            writeln!(out, "{name}:{} {}", line.number, line.text)
        } else {
            writeln!(out, "{}", line.text)
        }
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
