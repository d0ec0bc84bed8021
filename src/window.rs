//! Window resolver (§4.5 / C5): choose the `[start_col, end_col)` slice of
//! a cluster's line that stays inside the soft width budget, preferring to
//! keep the label-and-message core fully visible over strict truncation.
//!
//! `WidthCache::width_index(delta, lo, hi)` already returns an absolute
//! character index measured relative to `W[lo]` (§4.2), so unlike the
//! prose formulas in §4.5 this implementation never re-adds `arrow_len` to
//! a call already rooted at `lo = arrow_len` — see `DESIGN.md` for the
//! worked-out reading of that ambiguity.

use crate::cluster::Cluster;
use crate::width::WidthCache;

/// The resolved window for one cluster: `[start_col, end_col)` in
/// characters, plus whether each side needs an ellipsis glyph.
#[derive(Clone, Copy, Debug)]
pub struct Window {
    pub start_col: u32,
    pub end_col: u32,
    pub left_ellipsis: bool,
    pub right_ellipsis: bool,
}

/// Resolve a cluster's display window (§4.5).
pub fn resolve_window(
    cluster: &Cluster,
    widths: &WidthCache,
    line_width: u32,
    line_no_width: u32,
    margin_width: u32,
    ellipsis_width: u32,
) -> Window {
    let len = widths.len() as u32;

    if line_width == 0 {
        return Window {
            start_col: 0,
            end_col: len,
            left_ellipsis: false,
            right_ellipsis: false,
        };
    }

    let fixed = line_no_width + 4 + margin_width;
    let limit = line_width.saturating_sub(fixed);

    let arrow_len = cluster.arrow_len.min(len);
    let arrow = widths.at(arrow_len as usize) + cluster.arrow_len.saturating_sub(len);
    let max_msg_width = cluster.max_msg_width;
    let edge = arrow + 1 + max_msg_width;
    let line_w = widths.total();

    // Branch 1: everything fits, no windowing.
    if edge <= limit && line_w <= limit {
        return Window {
            start_col: 0,
            end_col: len,
            left_ellipsis: false,
            right_ellipsis: false,
        };
    }

    let min_col = cluster.min_col.min(len);
    let essential = (arrow.saturating_sub(widths.at(min_col as usize))) + 1 + max_msg_width;

    // Branch 2: even the essential core doesn't fit the budget; show it in
    // full and elide everything else.
    if essential + ellipsis_width >= limit {
        let budget = (1 + max_msg_width).saturating_sub(ellipsis_width);
        let end_col = widths.width_index(budget, arrow_len as usize, len as usize) as u32;
        return Window {
            start_col: min_col,
            end_col: end_col.max(arrow_len),
            left_ellipsis: min_col > 0,
            right_ellipsis: end_col < len,
        };
    }

    // Branch 3: only the right side overflows.
    if edge <= limit && line_w > limit {
        let budget = limit.saturating_sub(arrow).saturating_sub(ellipsis_width);
        let end_col = widths.width_index(budget, arrow_len as usize, len as usize) as u32;
        return Window {
            start_col: 0,
            end_col,
            left_ellipsis: false,
            right_ellipsis: end_col < len,
        };
    }

    // Branch 4: balanced window, trimming from both sides.
    let skip = (edge + ellipsis_width).saturating_sub(limit);
    let avail = line_w.saturating_sub(edge);
    let desired = limit.saturating_sub(essential) / 2;
    let balance = desired + desired.saturating_sub(avail);

    let start_col = widths.width_index(skip + balance, 0, min_col as usize) as u32;
    let budget = (1 + max_msg_width + balance).saturating_sub(ellipsis_width);
    let end_col = widths.width_index(budget, arrow_len as usize, len as usize) as u32;

    Window {
        start_col,
        end_col: end_col.max(arrow_len),
        left_ellipsis: start_col > 0,
        right_ellipsis: end_col < len,
    }
}

#[cfg(test)]
mod tests;
