//! Diagnostic report rendering: turns labeled source ranges into
//! compiler-style text output with line numbers, margin rails, underlines,
//! and callout arrows.
//!
//! The pipeline, leaves first: [`source`] builds a line index over raw
//! text, [`width`] measures display columns (tabs, wide/ambiguous/combining
//! characters), [`label`] normalizes caller-supplied [`Label`]s into
//! per-source [`label::Group`]s, [`cluster`] packs each line's labels into
//! width-bounded clusters, [`window`] trims long lines with an ellipsis
//! while keeping the label-and-message core visible, [`margin`] draws the
//! left-side rail for multi-line labels, and [`render`] walks all of the
//! above to produce the final text.
//!
//! ```
//! use codeframe::{Config, Label, NoColor, ReportBuilder, Source, SourceCache};
//!
//! let mut sources = SourceCache::new();
//! sources.insert(1, Source::new("<unknown>", "apple == orange;"));
//!
//! let report = ReportBuilder::error("can't compare apples with oranges")
//!     .with_label(Label::new(1, 0, 5, "This is an apple"))
//!     .with_label(Label::new(1, 10, 16, "This is an orange"));
//!
//! let mut out = Vec::new();
//! report.render(&mut out, &Config::default(), &NoColor, &sources).unwrap();
//! ```

pub mod builder;
pub mod cluster;
pub mod color;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod label;
pub mod margin;
pub mod render;
pub mod sink;
pub mod source;
pub mod width;
pub mod window;

pub use builder::ReportBuilder;
pub use color::{AnsiColors, ColorKind, ColorProvider, NoColor};
pub use config::{CharSet, Config, IndexType, LabelAttach};
pub use error::{ErrorCode, RenderError, SourceId};
pub use glyphs::{GlyphKind, GlyphSet};
pub use label::{Group, Label, LabelInfo};
pub use render::{render, Footer, Report, Severity};
pub use source::{Line, Source, SourceCache};
