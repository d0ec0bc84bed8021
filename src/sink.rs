//! Writer sink (§6) and the scratch row buffer renderers flush into.
//!
//! The public sink contract — `write(user_data, bytes) -> int`, fail-fast on
//! a non-zero return — is exactly [`std::io::Write`] at the Rust boundary:
//! any `Err` from a write aborts the render and is surfaced as
//! [`crate::error::RenderError::Io`].

use std::io::Write;

use crate::error::RenderError;

/// A growable text buffer a row is assembled into before a single flush to
/// the sink, so ASCII runs are not written one character at a time (§9
/// "String building").
#[derive(Default)]
pub struct RowBuffer {
    buf: String,
}

impl RowBuffer {
    pub fn new() -> Self {
        RowBuffer::default()
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn push_spaces(&mut self, n: u32) {
        for _ in 0..n {
            self.buf.push(' ');
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write the accumulated row to the sink and clear the buffer.
    pub fn flush(&mut self, sink: &mut dyn Write) -> Result<(), RenderError> {
        if !self.buf.is_empty() {
            sink.write_all(self.buf.as_bytes())?;
            self.buf.clear();
        }
        Ok(())
    }

    pub fn flush_line(&mut self, sink: &mut dyn Write) -> Result<(), RenderError> {
        self.buf.push('\n');
        self.flush(sink)
    }
}

/// Convenience for call sites that just want one string written as a line.
pub fn write_line(sink: &mut dyn Write, s: &str) -> Result<(), RenderError> {
    sink.write_all(s.as_bytes())?;
    sink.write_all(b"\n").map_err(RenderError::from)
}

#[cfg(test)]
mod tests;
