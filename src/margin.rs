//! Margin rail (§4.6 / C6): the left-side state machine drawing vertical,
//! horizontal, corner, and crossing glyphs for every row a group prints.
//!
//! A multi-line label's slot is fixed at grouping time (its index in
//! `Group::multi_labels`, longest span first — §4.3 step 4) and never
//! changes for the rest of the group's rows, satisfying the margin-slot
//! stability invariant (§8.5).

use crate::config::Config;
use crate::glyphs::{GlyphKind, GlyphSet};
use crate::label::Group;

/// Which kind of row the margin is being drawn for (§4.6).
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RowKind {
    Line,
    Arrow,
    Ellipsis,
    None,
}

/// Render the fixed-width margin-rail text for one row.
///
/// `margin_slot` is `Some(slot)` when this row's pointer/corner belongs to
/// the multi-line label occupying that slot (the cluster's margin label,
/// or — for `Arrow` rows — the label whose message is being emitted).
/// `margin_has_message` distinguishes a closing corner with a trailing
/// message (`Lcross`) from a plain open/close corner.
pub fn render_margin(
    group: &Group,
    glyphs: &GlyphSet,
    config: &Config,
    line_idx: usize,
    row: RowKind,
    margin_slot: Option<usize>,
    margin_has_message: bool,
) -> String {
    let mut out = String::new();
    let slot_width = config.slot_width();
    let mut sweeping = false;

    for (i, m) in group.multi_labels.iter().enumerate() {
        let is_start = m.start_line == line_idx;
        let open = m.start_line <= line_idx && line_idx <= m.end_line;
        let is_pointer = margin_slot == Some(i) && matches!(row, RowKind::Line | RowKind::Arrow);

        let (kind, glyph): (GlyphKind, &str) = if is_pointer {
            sweeping = true;
            let kind = match row {
                RowKind::Line => {
                    if is_start {
                        GlyphKind::Ltop
                    } else if margin_has_message {
                        GlyphKind::Lcross
                    } else {
                        GlyphKind::Lbot
                    }
                }
                RowKind::Arrow => {
                    if is_start {
                        GlyphKind::Ltop
                    } else {
                        GlyphKind::Lbot
                    }
                }
                _ => unreachable!(),
            };
            (kind, glyphs.get(kind))
        } else if sweeping {
            // A corner was already placed to our left; the rail sweeps
            // horizontally to the right edge of the margin (§4.6).
            let kind = if open && !config.cross_gap {
                GlyphKind::Xbar
            } else {
                GlyphKind::Hbar
            };
            (kind, glyphs.get(kind))
        } else if open {
            let kind = if row == RowKind::Ellipsis {
                GlyphKind::VbarGap
            } else {
                GlyphKind::Vbar
            };
            (kind, glyphs.get(kind))
        } else {
            (GlyphKind::Space, glyphs.get(GlyphKind::Space))
        };

        out.push_str(glyph);
        pad_slot(&mut out, glyphs, kind, slot_width);
    }

    // Trailing cell: connects the rail into the code text.
    let trailer = if sweeping {
        if matches!(row, RowKind::Line) {
            glyphs.get(GlyphKind::Rarrow)
        } else {
            glyphs.get(GlyphKind::Hbar)
        }
    } else {
        glyphs.get(GlyphKind::Space)
    };
    out.push_str(trailer);

    out
}

/// Pad a just-pushed single-glyph slot out to `slot_width` display cells.
/// A sweep/corner glyph (`Ltop`/`Lbot`/`Lcross`/`Hbar`/`Xbar`) continues
/// into its padding as `Hbar`, so e.g. a 2-wide `Ltop` slot reads `,-` not
/// `, ` — matching the `,-> apple` margin in spec.md's S2 scenario.
/// Every other glyph pads with plain spaces.
fn pad_slot(out: &mut String, glyphs: &GlyphSet, kind: GlyphKind, slot_width: u32) {
    let is_sweep = matches!(
        kind,
        GlyphKind::Ltop | GlyphKind::Lbot | GlyphKind::Lcross | GlyphKind::Hbar | GlyphKind::Xbar
    );
    let fill = if is_sweep {
        glyphs.get(GlyphKind::Hbar)
    } else {
        " "
    };
    let glyph = glyphs.get(kind);
    let used = crate::width::char_widths(glyph, 4, 1).into_iter().sum::<u32>();
    let fill_width = crate::width::char_widths(fill, 4, 1).into_iter().sum::<u32>().max(1);
    let mut remaining = slot_width.saturating_sub(used);
    while remaining > 0 {
        out.push_str(fill);
        remaining = remaining.saturating_sub(fill_width);
    }
}

#[cfg(test)]
mod tests;
