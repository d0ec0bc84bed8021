//! Color provider contract (§6) and the two built-in providers.
//!
//! Modeled as a trait rather than a C-style `(user_data, kind) -> bytes`
//! function pointer pair, per §9's "method dispatch via captured closures"
//! note — the analogous Rust shape is a trait object, not a raw callback.

/// The color categories a render can ask for (§6).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ColorKind {
    Reset,
    Error,
    Warning,
    Kind,
    Margin,
    SkippedMargin,
    Unimportant,
    Note,
    Label,
}

/// Supplies the escape sequence for each [`ColorKind`].
///
/// Disabling color is `NoColor`, a provider returning empty bytes for every
/// kind — not a separate code path through the renderer.
pub trait ColorProvider {
    fn color(&self, kind: ColorKind) -> &str;
}

/// Raw ANSI escapes, grounded on the private `colors` table terminal
/// emitters in this codebase have historically kept as string constants.
pub struct AnsiColors;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const KIND: &str = "\x1b[1m";
    pub const MARGIN: &str = "\x1b[1;34m";
    pub const SKIPPED_MARGIN: &str = "\x1b[2;34m";
    pub const UNIMPORTANT: &str = "\x1b[2m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const LABEL: &str = "\x1b[1;32m";
}

impl ColorProvider for AnsiColors {
    fn color(&self, kind: ColorKind) -> &str {
        match kind {
            ColorKind::Reset => ansi::RESET,
            ColorKind::Error => ansi::ERROR,
            ColorKind::Warning => ansi::WARNING,
            ColorKind::Kind => ansi::KIND,
            ColorKind::Margin => ansi::MARGIN,
            ColorKind::SkippedMargin => ansi::SKIPPED_MARGIN,
            ColorKind::Unimportant => ansi::UNIMPORTANT,
            ColorKind::Note => ansi::NOTE,
            ColorKind::Label => ansi::LABEL,
        }
    }
}

/// Colorization disabled: every kind maps to an empty string.
pub struct NoColor;

impl ColorProvider for NoColor {
    fn color(&self, _kind: ColorKind) -> &str {
        ""
    }
}
