//! Width engine (§4.2 / C2): per-codepoint display width, tab expansion,
//! and the cumulative-width cache each rendered line is measured against.
//!
//! Ambiguous-width characters are detected via the gap between
//! [`unicode_width::UnicodeWidthChar::width`] (which resolves ambiguous
//! characters to 1) and `width_cjk` (which resolves them to 2) — the
//! standard trick for exposing `ambi_width` without a private table.
//!
//! Grapheme clustering (regional-indicator flag pairs, ZWJ emoji sequences,
//! combining marks riding on a base character) is delegated to
//! [`unicode_segmentation`] rather than hand-rolled lookahead: a cluster's
//! display width is charged entirely to its first character, and every
//! other character in the cluster is zero-width. This is what lets a label
//! drawn under a multi-codepoint grapheme still line up with the glyph the
//! terminal actually renders as one cell (or two, for a flag).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Whether a grapheme cluster is exactly a paired flag (two regional
/// indicators), which terminals render as one double-wide cell regardless
/// of what `unicode-width` says about the indicators individually.
fn is_regional_indicator_pair(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if is_regional_indicator(a) && is_regional_indicator(b)
    )
}

/// Display width of a single codepoint in isolation (no tab/pairing rules).
///
/// `ambi_width` is the width assigned to East-Asian "ambiguous" characters
/// (§6 `ambi_width` config). Invalid/control/default-ignorable codepoints
/// count as 0; everything unrecognized falls back to 1.
pub fn codepoint_width(c: char, ambi_width: u8) -> u32 {
    let narrow = c.width();
    let wide = c.width_cjk();
    match (narrow, wide) {
        (None, _) => 0,
        (Some(1), Some(2)) => u32::from(ambi_width),
        (Some(n), _) => n as u32,
    }
}

/// Per-character display widths for one line of text, honoring tab
/// expansion and grapheme-cluster pairing. Index `i` is the width of the
/// `i`-th character (not the `i`-th grapheme): a multi-character cluster
/// contributes its width at its first character and zeros at the rest, so
/// this vector always has one entry per `char` in `text`.
pub fn char_widths(text: &str, tab_width: u32, ambi_width: u8) -> Vec<u32> {
    let mut widths = Vec::with_capacity(text.len());
    let mut col: u32 = 0;
    for grapheme in text.graphemes(true) {
        let mut chars = grapheme.chars();
        let first = chars.next().expect("graphemes are never empty");
        let tail_len = chars.count();

        let w = if first == '\t' {
            let tw = tab_width.max(1);
            tw - (col % tw)
        } else if is_regional_indicator_pair(grapheme) {
            2
        } else {
            codepoint_width(first, ambi_width)
        };

        widths.push(w);
        col += w;
        widths.extend(std::iter::repeat(0).take(tail_len));
    }
    widths
}

/// Cumulative-width cache for a line: `W[i]` is the display width of the
/// first `i` characters, `W[0] == 0`.
#[derive(Clone, Debug)]
pub struct WidthCache {
    w: Vec<u32>,
}

impl WidthCache {
    pub fn build(text: &str, tab_width: u32, ambi_width: u8) -> Self {
        let widths = char_widths(text, tab_width, ambi_width);
        let mut w = Vec::with_capacity(widths.len() + 1);
        let mut acc = 0u32;
        w.push(0);
        for width in widths {
            acc += width;
            w.push(acc);
        }
        WidthCache { w }
    }

    /// Number of characters this cache was built over.
    pub fn len(&self) -> usize {
        self.w.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `W[i]`, clamped to the valid range.
    pub fn at(&self, i: usize) -> u32 {
        self.w[i.min(self.w.len() - 1)]
    }

    pub fn total(&self) -> u32 {
        self.w[self.w.len() - 1]
    }

    /// Largest `i` in `[lo, hi]` such that `W[i] - W[lo] <= delta`.
    pub fn width_index(&self, delta: u32, lo: usize, hi: usize) -> usize {
        let hi = hi.min(self.len());
        let lo = lo.min(hi);
        let base = self.at(lo);
        let target = base + delta;
        // w is non-decreasing, so partition_point finds the first index
        // whose width exceeds target; the answer is one before that.
        let slice = &self.w[lo..=hi];
        let offset = slice.partition_point(|&w| w <= target);
        lo + offset.saturating_sub(1)
    }
}
