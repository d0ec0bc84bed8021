//! Glyph sets (§6): the byte chunks drawn for every margin-rail and
//! box-drawing role, with ASCII and Unicode box-drawing built-ins.
//!
//! The C ABI's "length-prefixed byte chunk" becomes a plain `&'static str`
//! at the Rust boundary; callers that need raw bytes can call `.as_bytes()`.

/// Every distinct glyph role a render can draw, per §6.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum GlyphKind {
    Hbar,
    Vbar,
    Xbar,
    VbarBreak,
    VbarGap,
    Uarrow,
    Rarrow,
    Ltop,
    Mtop,
    Rtop,
    Lbot,
    Mbot,
    Rbot,
    Lbox,
    Rbox,
    Lcross,
    Rcross,
    Underbar,
    Underline,
    Ellipsis,
    Space,
    Newline,
    Colon,
}

/// A full mapping from [`GlyphKind`] to the text drawn for it.
#[derive(Clone, Copy, Debug)]
pub struct GlyphSet {
    glyphs: [&'static str; 23],
}

const fn index(kind: GlyphKind) -> usize {
    kind as usize
}

impl GlyphSet {
    pub fn get(&self, kind: GlyphKind) -> &'static str {
        self.glyphs[index(kind)]
    }

    /// Display width (in columns) of the ellipsis glyph, used by the window
    /// resolver's `ellipsis_width` term.
    pub fn ellipsis_width(&self) -> u32 {
        crate::width::char_widths(self.get(GlyphKind::Ellipsis), 4, 1)
            .into_iter()
            .sum()
    }

    pub const ASCII: GlyphSet = GlyphSet {
        glyphs: [
            "-",  // Hbar
            "|",  // Vbar
            "+",  // Xbar
            "~",  // VbarBreak
            ":",  // VbarGap
            "^",  // Uarrow
            ">",  // Rarrow
            ",",  // Ltop
            "v",  // Mtop
            ".",  // Rtop
            "`",  // Lbot
            "^",  // Mbot
            "'",  // Rbot
            ",",  // Lbox
            ".",  // Rbox
            "|",  // Lcross
            "|",  // Rcross
            "^",  // Underbar
            "^",  // Underline
            "...", // Ellipsis
            " ",  // Space
            "\n", // Newline
            ":",  // Colon
        ],
    };

    pub const UNICODE: GlyphSet = GlyphSet {
        glyphs: [
            "─", // Hbar
            "│", // Vbar
            "┼", // Xbar
            "~", // VbarBreak
            ":", // VbarGap
            "↑", // Uarrow
            "→", // Rarrow
            "╭", // Ltop
            "┬", // Mtop
            "╮", // Rtop
            "╰", // Lbot
            "┴", // Mbot
            "╯", // Rbot
            "├", // Lbox
            "┤", // Rbox
            "├", // Lcross
            "┤", // Rcross
            "^", // Underbar
            "^", // Underline
            "…", // Ellipsis
            " ", // Space
            "\n", // Newline
            ":", // Colon
        ],
    };
}

impl From<crate::config::CharSet> for GlyphSet {
    fn from(cs: crate::config::CharSet) -> Self {
        match cs {
            crate::config::CharSet::Ascii => GlyphSet::ASCII,
            crate::config::CharSet::Unicode => GlyphSet::UNICODE,
        }
    }
}

#[cfg(test)]
mod tests;
