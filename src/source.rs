//! Source model (§4.1 / C1): a line index over immutable text.
//!
//! Splits on LF only (§1 non-goal: other separators are not recognized).
//! Construction is a single O(n) scan; lookups are O(log L) binary search
//! over precomputed line offsets.

use crate::error::SourceId;

/// One line of a [`Source`].
///
/// `char_len`/`byte_len` exclude the trailing `\n`; `has_newline` records
/// whether one was present. The invariant from §3 holds by construction:
/// `Line[i+1].offset == Line[i].offset + Line[i].len + has_newline as usize`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Line {
    pub char_offset: u32,
    pub byte_offset: u32,
    pub char_len: u32,
    pub byte_len: u32,
    pub has_newline: bool,
}

impl Line {
    /// The "newline slot": one past the last character, where a label may
    /// still point (at the newline itself, or at EOF for the final line).
    pub fn char_end_slot(&self) -> u32 {
        self.char_offset + self.char_len
    }

    pub fn byte_end_slot(&self) -> u32 {
        self.byte_offset + self.byte_len
    }
}

/// An immutable source text plus its precomputed line table.
#[derive(Clone, Debug)]
pub struct Source {
    name: String,
    text: String,
    lines: Vec<Line>,
}

impl Source {
    /// Build a source from its name and full text, scanning once for line
    /// boundaries. Empty input produces a single empty line, per §4.1.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut char_offset = 0u32;
        let mut byte_offset = 0u32;
        let mut line_char_start = 0u32;
        let mut line_byte_start = 0u32;

        for ch in text.chars() {
            if ch == '\n' {
                lines.push(Line {
                    char_offset: line_char_start,
                    byte_offset: line_byte_start,
                    char_len: char_offset - line_char_start,
                    byte_len: byte_offset - line_byte_start,
                    has_newline: true,
                });
                char_offset += 1;
                byte_offset += ch.len_utf8() as u32;
                line_char_start = char_offset;
                line_byte_start = byte_offset;
            } else {
                char_offset += 1;
                byte_offset += ch.len_utf8() as u32;
            }
        }
        lines.push(Line {
            char_offset: line_char_start,
            byte_offset: line_byte_start,
            char_len: char_offset - line_char_start,
            byte_len: byte_offset - line_byte_start,
            has_newline: false,
        });

        Source {
            name: name.into(),
            text,
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Text of a single line, excluding its trailing `\n`.
    pub fn line_text(&self, index: usize) -> &str {
        let Some(line) = self.lines.get(index) else {
            return "";
        };
        let start = line.byte_offset as usize;
        let end = start + line.byte_len as usize;
        &self.text[start..end]
    }

    /// Find the line containing a character position.
    ///
    /// Returns the greatest line whose `char_offset <= pos`. A `pos` sitting
    /// exactly in a line's newline slot resolves to that line, not the next
    /// one — `partition_point` already gives us this because the *next*
    /// line's offset is `pos + 1` in that case, strictly greater than `pos`.
    pub fn line_for_char(&self, pos: u32) -> (usize, &Line) {
        let idx = self.lines.partition_point(|l| l.char_offset <= pos);
        let idx = idx.saturating_sub(1).min(self.lines.len() - 1);
        (idx, &self.lines[idx])
    }

    pub fn line_for_byte(&self, pos: u32) -> (usize, &Line) {
        let idx = self.lines.partition_point(|l| l.byte_offset <= pos);
        let idx = idx.saturating_sub(1).min(self.lines.len() - 1);
        (idx, &self.lines[idx])
    }

    /// Character column (0-based, within the line) of a character position,
    /// clamped into `[0, char_end_slot]` for the containing line.
    pub fn char_col(&self, pos: u32) -> (usize, u32) {
        let (idx, line) = self.line_for_char(pos);
        let col = pos.clamp(line.char_offset, line.char_end_slot()) - line.char_offset;
        (idx, col)
    }

    /// Convert a byte offset to a character offset by walking the
    /// containing line's text, per §4.3 step 1.
    pub fn byte_to_char(&self, byte_pos: u32) -> u32 {
        let (idx, line) = self.line_for_byte(byte_pos);
        let line_byte_start = line.byte_offset as usize;
        let within = (byte_pos as usize)
            .saturating_sub(line_byte_start)
            .min(line.byte_len as usize);
        let text = self.line_text(idx);
        let chars_before = text[..within.min(text.len())].chars().count() as u32;
        line.char_offset + chars_before
    }
}

/// All sources referenced by a render, keyed by a caller-chosen id.
///
/// Sources are created before rendering and live until the cache is
/// dropped; labels reference them by id rather than owning them (§3
/// Lifecycles).
#[derive(Clone, Debug, Default)]
pub struct SourceCache {
    sources: Vec<(SourceId, Source)>,
}

impl SourceCache {
    pub fn new() -> Self {
        SourceCache::default()
    }

    pub fn insert(&mut self, id: SourceId, source: Source) {
        if let Some(slot) = self.sources.iter_mut().find(|(i, _)| *i == id) {
            slot.1 = source;
        } else {
            self.sources.push((id, source));
        }
    }

    pub fn get(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests;
