//! Cluster assembler (§4.4 / C4): for one source line, collect the labels
//! that touch it, order them, and split them into width-bounded clusters.
//!
//! Columns in [`LineLabel`] are 0-based character offsets from the start of
//! the line; the renderer adds one when it prints a `line:col` position.

use crate::color::ColorKind;
use crate::config::{Config, LabelAttach};
use crate::label::Group;
use crate::source::Line;
use crate::width::WidthCache;

/// A label projected onto a single line (§3).
#[derive(Clone, Debug)]
pub struct LineLabel {
    pub col: u32,
    /// The span's actual start column — usually equal to `col`, except for
    /// an inline label whose `label_attach` picks a landing point other than
    /// `Start` (§4.4), where the underline still has to cover the whole span
    /// even though the arrow lands in its middle or at its end.
    pub start_col: u32,
    pub end_col: u32,
    pub draw_msg: bool,
    pub multi: bool,
    /// Index into the owning `Group::multi_labels`, for labels with `multi`
    /// set — this is the label's fixed margin-rail slot (§4.6).
    pub slot: Option<usize>,
    pub message: String,
    pub message_display_width: u32,
    pub color: ColorKind,
    pub priority: i32,
    pub order: i32,
    pub span_len: u32,
}

/// One horizontal rendering pass over a line (§3).
#[derive(Clone, Debug)]
pub struct Cluster {
    pub line_no: usize,
    pub margin_label: Option<LineLabel>,
    pub line_labels: Vec<LineLabel>,
    pub arrow_len: u32,
    pub min_col: u32,
    pub max_msg_width: u32,
}

/// What a given line should render as, before window resolution.
pub enum LineRender {
    Clusters(Vec<Cluster>),
    Ellipsis,
    Skip,
}

fn attach_col(attach: LabelAttach, start: u32, end: u32) -> u32 {
    match attach {
        LabelAttach::Start => start,
        LabelAttach::End => end,
        LabelAttach::Middle => (start + end) / 2,
    }
}

fn collect_line_labels(
    group: &Group,
    line: &Line,
    line_idx: usize,
    config: &Config,
) -> (Vec<LineLabel>, bool) {
    let mut out = Vec::new();
    let mut spanned_by_multi = false;

    for (slot, m) in group.multi_labels.iter().enumerate() {
        if line_idx < m.start_line || line_idx > m.end_line {
            continue;
        }
        spanned_by_multi = true;
        if m.start_line == line_idx {
            out.push(LineLabel {
                col: m.start_char - line.char_offset,
                start_col: m.start_char - line.char_offset,
                end_col: m.start_char - line.char_offset,
                draw_msg: false,
                multi: true,
                slot: Some(slot),
                message: m.message.clone(),
                message_display_width: m.message_display_width,
                color: m.color,
                priority: m.priority,
                order: m.order,
                span_len: m.span_len(),
            });
        } else if m.end_line == line_idx {
            let col = m.end_char.saturating_sub(line.char_offset);
            out.push(LineLabel {
                col,
                start_col: col,
                end_col: col,
                draw_msg: true,
                multi: true,
                slot: Some(slot),
                message: m.message.clone(),
                message_display_width: m.message_display_width,
                color: m.color,
                priority: m.priority,
                order: m.order,
                span_len: m.span_len(),
            });
        }
    }

    for l in &group.inline_labels {
        if l.start_line != line_idx {
            continue;
        }
        let start = l.start_char - line.char_offset;
        let end = l.end_char.saturating_sub(line.char_offset);
        let col = attach_col(config.label_attach, start, end);
        out.push(LineLabel {
            col,
            start_col: start,
            end_col: end.max(col),
            draw_msg: true,
            multi: false,
            slot: None,
            message: l.message.clone(),
            message_display_width: l.message_display_width,
            color: l.color,
            priority: l.priority,
            order: l.order,
            span_len: l.span_len(),
        });
    }

    (out, spanned_by_multi)
}

/// Build the cluster list (or ellipsis/skip decision) for one source line
/// of a group (§4.4).
pub fn assemble_line(
    group: &Group,
    line: &Line,
    line_idx: usize,
    widths: &WidthCache,
    config: &Config,
    line_no_width: u32,
) -> LineRender {
    let (mut line_labels, spanned_by_multi) = collect_line_labels(group, line, line_idx, config);

    if line_labels.is_empty() {
        return if spanned_by_multi {
            LineRender::Ellipsis
        } else {
            LineRender::Skip
        };
    }

    // §4.4 step 2: stable sort by (order, col, span length).
    if config.column_order {
        line_labels.sort_by(|a, b| a.col.cmp(&b.col).then(a.span_len.cmp(&b.span_len)));
    } else {
        line_labels.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then(a.col.cmp(&b.col))
                .then(a.span_len.cmp(&b.span_len))
        });
    }

    let extra_arrow_len = config.extra_arrow_len();
    let soft_limit = if config.windowing_enabled() {
        config
            .line_width
            .saturating_sub(line_no_width + 4 + group.margin_width)
    } else {
        u32::MAX
    };

    let line_end_col = line.char_len + u32::from(line.has_newline);

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut cur_margin: Option<LineLabel> = None;
    let mut cur_labels: Vec<LineLabel> = Vec::new();
    let mut min_start_display = u32::MAX;
    let mut max_end_display = 0u32;
    let mut max_msg_width = 0u32;

    // Whether this line's multi-line labels already had a margin picked for
    // an earlier cluster on the same line; only the first cluster gets one.
    let mut margin_claimed = false;

    for mut ll in line_labels {
        let becomes_margin = ll.multi && !margin_claimed;
        if becomes_margin {
            margin_claimed = true;
        }

        // §4.4 step 5: extend end_col for a multi terminus with a message
        // that is *not* the chosen margin label.
        if ll.multi && ll.draw_msg && !becomes_margin {
            ll.end_col = line_end_col;
        }

        let start_disp = widths.at(ll.start_col.min(ll.col).min(widths.len() as u32) as usize);
        let end_disp = widths.at(ll.end_col.min(widths.len() as u32) as usize);
        let hyp_min = min_start_display.min(start_disp);
        let hyp_max = max_end_display.max(end_disp);
        let hyp_msg = max_msg_width.max(ll.message_display_width);
        let hyp_width = (hyp_max - hyp_min.min(hyp_max)) + extra_arrow_len + 1 + hyp_msg;

        let non_empty = cur_margin.is_some() || !cur_labels.is_empty();
        if non_empty && hyp_width > soft_limit {
            clusters.push(finish_cluster(
                line_idx,
                cur_margin.take(),
                std::mem::take(&mut cur_labels),
                extra_arrow_len,
                max_msg_width,
            ));
            min_start_display = u32::MAX;
            max_end_display = 0;
            max_msg_width = 0;
            // A new cluster starts fresh: its own multi-line margin label
            // may be picked independently of the cluster just closed (§3
            // glossary: margin label is per-cluster, not per-line).
            margin_claimed = false;
        }

        min_start_display = min_start_display.min(start_disp);
        max_end_display = max_end_display.max(end_disp);
        max_msg_width = max_msg_width.max(ll.message_display_width);

        // §4.4 step 4: the margin label is excluded from line_labels unless
        // it is itself an end-of-span terminus with a message to draw.
        if becomes_margin && !ll.draw_msg {
            cur_margin = Some(ll);
        } else {
            if becomes_margin {
                cur_margin = Some(ll.clone());
            }
            cur_labels.push(ll);
        }
    }

    if cur_margin.is_some() || !cur_labels.is_empty() {
        clusters.push(finish_cluster(
            line_idx,
            cur_margin,
            cur_labels,
            extra_arrow_len,
            max_msg_width,
        ));
    }

    LineRender::Clusters(clusters)
}

fn finish_cluster(
    line_no: usize,
    margin_label: Option<LineLabel>,
    line_labels: Vec<LineLabel>,
    extra_arrow_len: u32,
    max_msg_width: u32,
) -> Cluster {
    let min_col = line_labels
        .iter()
        .chain(margin_label.iter())
        .map(|l| l.start_col.min(l.col))
        .min()
        .unwrap_or(0);
    let arrow_len = line_labels
        .iter()
        .chain(margin_label.iter())
        .map(|l| l.end_col)
        .max()
        .unwrap_or(0)
        + extra_arrow_len;
    let max_msg_width = max_msg_width.max(
        margin_label
            .as_ref()
            .map_or(0, |m| m.message_display_width),
    );

    Cluster {
        line_no,
        margin_label,
        line_labels,
        arrow_len,
        min_col,
        max_msg_width,
    }
}

#[cfg(test)]
mod tests;
