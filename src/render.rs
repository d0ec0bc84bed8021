//! Writer / Renderer (§4.7 / C7): orchestrates header, per-line code rows,
//! underline rows, arrow rows, and footer, delegating to C3-C6 along the
//! way and tracking the current color run as it writes.

use std::io::Write;

use crate::cluster::{assemble_line, Cluster, LineRender};
use crate::color::{ColorKind, ColorProvider};
use crate::config::Config;
use crate::error::RenderError;
use crate::glyphs::{GlyphKind, GlyphSet};
use crate::label::{build_groups, Group, Label, LabelInfo};
use crate::margin::{render_margin, RowKind};
use crate::sink::RowBuffer;
use crate::source::SourceCache;
use crate::width::WidthCache;
use crate::window::resolve_window;

/// Diagnostic severity, selecting the header's color and keyword (§4.7.2).
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl Severity {
    fn keyword(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Note => "Note",
            Severity::Help => "Help",
        }
    }

    fn color_kind(self) -> ColorKind {
        match self {
            Severity::Error => ColorKind::Error,
            Severity::Warning => ColorKind::Warning,
            Severity::Note => ColorKind::Note,
            Severity::Help => ColorKind::Kind,
        }
    }
}

/// Trailing help/note paragraphs (§4.7.4).
#[derive(Clone, Debug, Default)]
pub struct Footer {
    pub help: Vec<String>,
    pub note: Vec<String>,
}

/// Everything the renderer needs for one invocation: the diagnostic body,
/// independent of the public builder surface (§9 "dynamic tables-as-records
/// become fixed records").
pub struct Report<'a> {
    pub severity: Severity,
    pub code: Option<&'a str>,
    pub title: &'a str,
    pub labels: &'a [Label],
    pub footer: Footer,
}

fn digits(mut n: u32) -> u32 {
    let mut count = 1;
    n += 1; // line numbers are 1-based; count digits of the largest printed one.
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Render a complete diagnostic to `sink` (§4.7 top-level sequence).
///
/// # Errors
/// Returns [`RenderError::InvalidSource`] if a label names an unknown
/// source, or [`RenderError::Io`] if the sink fails.
pub fn render(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    sources: &SourceCache,
    report: &Report<'_>,
) -> Result<(), RenderError> {
    let groups = build_groups(report.labels, sources, config)?;
    let glyphs: GlyphSet = config.char_set.into();

    let line_no_width = groups
        .iter()
        .map(|g| digits(g.last_line() as u32))
        .max()
        .unwrap_or(1);

    emit_header(sink, colors, report)?;

    for group in &groups {
        emit_group(sink, config, colors, sources, &glyphs, group, line_no_width)?;
    }

    emit_footer(sink, colors, &glyphs, &report.footer, line_no_width)?;

    Ok(())
}

fn emit_header(
    sink: &mut dyn Write,
    colors: &dyn ColorProvider,
    report: &Report<'_>,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_str(colors.color(report.severity.color_kind()));
    if let Some(code) = report.code {
        buf.push('[');
        buf.push_str(code);
        buf.push_str("] ");
    }
    buf.push_str(report.severity.keyword());
    buf.push(':');
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(report.title);
    buf.flush_line(sink)
}

fn emit_group(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    sources: &SourceCache,
    glyphs: &GlyphSet,
    group: &Group,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let source = sources
        .get(group.src)
        .ok_or(RenderError::InvalidSource(group.src))?;

    let (anchor_line, anchor_col) = source.char_col(group.first_char);
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width + 1);
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Ltop));
    buf.push_str(glyphs.get(GlyphKind::Hbar));
    buf.push('[');
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push_str(&reference_path(
        config,
        source.name(),
        anchor_line + 1,
        anchor_col as usize + 1,
    ));
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(" ]");
    buf.push_str(colors.color(ColorKind::Reset));
    buf.flush_line(sink)?;

    if !config.compact {
        let mut buf = RowBuffer::new();
        buf.push_spaces(line_no_width + 1);
        buf.push_str(colors.color(ColorKind::Margin));
        buf.push_str(glyphs.get(GlyphKind::Vbar));
        buf.push_str(colors.color(ColorKind::Reset));
        buf.flush_line(sink)?;
    }

    for line_idx in group.first_line()..=group.last_line() {
        let line = match source.line(line_idx) {
            Some(l) => *l,
            None => continue,
        };
        let text = source.line_text(line_idx);
        let widths = WidthCache::build(text, config.tab_width, config.ambi_width);

        match assemble_line(group, &line, line_idx, &widths, config, line_no_width) {
            LineRender::Skip => continue,
            LineRender::Ellipsis => {
                emit_ellipsis_row(sink, config, colors, glyphs, group, line_no_width)?;
            }
            LineRender::Clusters(clusters) => {
                for cluster in clusters {
                    emit_cluster(
                        sink,
                        config,
                        colors,
                        glyphs,
                        group,
                        line_idx,
                        text,
                        &widths,
                        &cluster,
                        line_no_width,
                    )?;
                }
            }
        }
    }

    if !config.compact {
        write_blank(sink, colors, glyphs, line_no_width)?;
    }
    Ok(())
}

fn reference_path(config: &Config, name: &str, line: usize, col: usize) -> String {
    let suffix = format!(":{line}:{col}");
    if config.line_width == 0 {
        return format!("{name}{suffix}");
    }
    let min_filename_width = 8u32;
    let budget = config.line_width.saturating_sub(10).max(min_filename_width) as usize;
    if name.chars().count() + suffix.len() <= budget {
        return format!("{name}{suffix}");
    }
    let keep = budget.saturating_sub(suffix.len() + 1).max(1);
    let tail: String = name
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("…{tail}{suffix}")
}

fn write_blank(
    sink: &mut dyn Write,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width + 1);
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Vbar));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.flush_line(sink)
}

fn emit_ellipsis_row(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    group: &Group,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width);
    buf.push_str(glyphs.get(GlyphKind::Colon));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::SkippedMargin));
    buf.push_str(glyphs.get(GlyphKind::VbarGap));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Margin));
    let margin = render_margin(group, glyphs, config, usize::MAX, RowKind::Ellipsis, None, false);
    buf.push_str(&margin);
    buf.push_str(colors.color(ColorKind::Reset));
    buf.flush_line(sink)
}

#[allow(clippy::too_many_arguments)]
fn emit_cluster(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    group: &Group,
    line_idx: usize,
    text: &str,
    widths: &WidthCache,
    cluster: &Cluster,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let window = resolve_window(
        cluster,
        widths,
        config.line_width,
        line_no_width,
        group.margin_width,
        glyphs.ellipsis_width(),
    );

    let margin_slot = cluster.margin_label.as_ref().and_then(|m| m.slot);
    let margin_has_message = cluster.margin_label.as_ref().is_some_and(|m| m.draw_msg);

    // Code row.
    let mut buf = RowBuffer::new();
    buf.push_str(&format!("{:>width$} ", line_idx + 1, width = line_no_width as usize));
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Vbar));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(&render_margin(
        group,
        glyphs,
        config,
        line_idx,
        RowKind::Line,
        margin_slot,
        margin_has_message,
    ));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');

    if window.left_ellipsis {
        buf.push_str(glyphs.get(GlyphKind::Ellipsis));
    }
    write_code_span(&mut buf, config, colors, group, text, window.start_col, window.end_col);
    if window.right_ellipsis {
        buf.push_str(glyphs.get(GlyphKind::Ellipsis));
    }
    buf.flush_line(sink)?;

    // §4.7: an underline row is drawn the first time only, when at least one
    // label on this line has a nonzero span — a zero-width label has nothing
    // to underline, only an arrow.
    let underline_drawn = config.underlines
        && cluster.line_labels.iter().any(|l| l.end_col > l.start_col);
    if underline_drawn {
        emit_underline_row(
            sink,
            config,
            colors,
            glyphs,
            group,
            cluster,
            line_no_width,
            window.start_col,
        )?;
    }

    let targets: Vec<&crate::cluster::LineLabel> =
        cluster.line_labels.iter().filter(|ll| ll.draw_msg || ll.multi).collect();
    for (i, target) in targets.iter().enumerate() {
        if i > 0 || !underline_drawn {
            emit_connector_row(
                sink,
                config,
                colors,
                glyphs,
                group,
                cluster,
                &targets[i..],
                line_no_width,
                window.start_col,
            )?;
        }
        emit_arrow_row(
            sink,
            config,
            colors,
            glyphs,
            group,
            cluster,
            target,
            line_no_width,
            window.start_col,
        )?;
    }

    Ok(())
}

/// A row drawn between two message/arrow rows showing which labels still
/// have a message pending below — a plain vbar at each pending label's
/// attach column, nothing else (§4.7).
#[allow(clippy::too_many_arguments)]
fn emit_connector_row(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    group: &Group,
    cluster: &Cluster,
    pending: &[&crate::cluster::LineLabel],
    line_no_width: u32,
    window_start_col: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width + 1);
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Vbar));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(&render_margin(
        group,
        glyphs,
        config,
        cluster.line_no,
        RowKind::Arrow,
        None,
        false,
    ));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');

    buf.push_spaces(cluster.min_col.saturating_sub(window_start_col));
    let end = pending.iter().map(|l| l.col + 1).max().unwrap_or(cluster.min_col);
    for col in cluster.min_col..end {
        if let Some(l) = pending.iter().find(|l| l.col == col) {
            buf.push_str(colors.color(l.color));
            buf.push_str(glyphs.get(GlyphKind::Vbar));
            buf.push_str(colors.color(ColorKind::Reset));
        } else {
            buf.push(' ');
        }
    }
    buf.flush_line(sink)
}

fn write_code_span(
    buf: &mut RowBuffer,
    _config: &Config,
    colors: &dyn ColorProvider,
    group: &Group,
    text: &str,
    start_col: u32,
    end_col: u32,
) {
    let chars: Vec<char> = text.chars().collect();
    let mut current: Option<ColorKind> = None;
    let line_offset_labels: Vec<&LabelInfo> = group
        .inline_labels
        .iter()
        .chain(group.multi_labels.iter())
        .collect();

    for (i, ch) in chars
        .iter()
        .enumerate()
        .skip(start_col as usize)
        .take((end_col.saturating_sub(start_col)) as usize)
    {
        let highlight = highlight_for_column(&line_offset_labels, i as u32);
        if highlight != current {
            if current.is_some() {
                buf.push_str(colors.color(ColorKind::Reset));
            }
            if let Some(kind) = highlight {
                buf.push_str(colors.color(kind));
            } else {
                buf.push_str(colors.color(ColorKind::Unimportant));
            }
            current = highlight;
        }
        if *ch == '\t' {
            buf.push(' ');
        } else {
            buf.push(*ch);
        }
    }
    if current.is_some() {
        buf.push_str(colors.color(ColorKind::Reset));
    }
}

/// The winning label for a character column: highest priority, ties broken
/// by shorter span (§4.7 "Code row rendering").
fn highlight_for_column(labels: &[&LabelInfo], col: u32) -> Option<ColorKind> {
    labels
        .iter()
        .filter(|l| (l.start_char..l.end_char.max(l.start_char + 1)).contains(&col))
        .max_by(|a, b| a.priority.cmp(&b.priority).then(b.span_len().cmp(&a.span_len())))
        .map(|l| l.color)
}

fn emit_underline_row(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    group: &Group,
    cluster: &Cluster,
    line_no_width: u32,
    window_start_col: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width + 1);
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Vbar));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(&render_margin(
        group,
        glyphs,
        config,
        cluster.line_no,
        RowKind::None,
        None,
        false,
    ));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');

    // Columns before the first label carry no glyph at all; pad up to the
    // window's visible start so this row lines up under the code row.
    buf.push_spaces(cluster.min_col.saturating_sub(window_start_col));

    let end = cluster
        .line_labels
        .iter()
        .map(|l| l.end_col.max(l.start_col + 1))
        .max()
        .unwrap_or(0);
    for col in cluster.min_col..end {
        let owner = cluster
            .line_labels
            .iter()
            .find(|l| (l.start_col..l.end_col.max(l.start_col + 1)).contains(&col));
        match owner {
            // The label's attach column (where its arrow will land) carries
            // a vertical bar through the underline, not a flat dash — a
            // multi-line label under `multiline_arrows` draws it as an
            // upward arrowhead instead (§4.7).
            Some(l) if col == l.col && config.multiline_arrows && config.compact && l.multi => {
                buf.push_str(glyphs.get(GlyphKind::Uarrow));
            }
            Some(l) if col == l.col => buf.push_str(glyphs.get(GlyphKind::Vbar)),
            Some(_) => buf.push_str(glyphs.get(GlyphKind::Underline)),
            None => buf.push(' '),
        }
    }
    buf.flush_line(sink)
}

fn emit_arrow_row(
    sink: &mut dyn Write,
    config: &Config,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    group: &Group,
    cluster: &Cluster,
    target: &crate::cluster::LineLabel,
    line_no_width: u32,
    window_start_col: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width + 1);
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(glyphs.get(GlyphKind::Vbar));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    buf.push_str(colors.color(ColorKind::Margin));
    buf.push_str(&render_margin(
        group,
        glyphs,
        config,
        cluster.line_no,
        RowKind::Arrow,
        target.slot,
        target.draw_msg,
    ));
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');

    // Columns before the first label carry no glyph at all; pad up to the
    // window's visible start so this row lines up under the code row.
    buf.push_spaces(cluster.min_col.saturating_sub(window_start_col));

    // A label still pending a message below is shown on its own connector
    // row (`emit_connector_row`), not threaded through here — this row's own
    // lead-in up to the landing glyph is blank (§4.7).
    buf.push_spaces(target.col.saturating_sub(cluster.min_col));
    // Inline labels land with `Lbot`; a multi-line label's start terminus
    // (no message here, the message rides on its end terminus) lands with
    // `Rbot`, and its end terminus (the one that carries the message)
    // lands with `Mbot` (§4.7).
    let landing = if !target.multi {
        GlyphKind::Lbot
    } else if target.draw_msg {
        GlyphKind::Mbot
    } else {
        GlyphKind::Rbot
    };
    buf.push_str(colors.color(target.color));
    buf.push_str(glyphs.get(landing));
    buf.push_str(colors.color(ColorKind::Reset));

    if target.draw_msg && !target.message.is_empty() {
        if config.align_messages {
            buf.push_str(colors.color(target.color));
            for _ in target.col..cluster.arrow_len {
                buf.push_str(glyphs.get(GlyphKind::Hbar));
            }
            buf.push_str(colors.color(ColorKind::Reset));
        }
        buf.push(' ');
        buf.push_str(colors.color(target.color));
        buf.push_str(&target.message);
        buf.push_str(colors.color(ColorKind::Reset));
    }
    buf.flush_line(sink)
}

fn emit_footer(
    sink: &mut dyn Write,
    colors: &dyn ColorProvider,
    glyphs: &GlyphSet,
    footer: &Footer,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let multiple = footer.help.len() + footer.note.len() > 1;
    let mut n = 0usize;
    for note in &footer.note {
        n += 1;
        emit_footer_line(sink, colors, "Note", note, multiple.then_some(n), line_no_width)?;
    }
    for help in &footer.help {
        n += 1;
        emit_footer_line(sink, colors, "Help", help, multiple.then_some(n), line_no_width)?;
    }

    let mut buf = RowBuffer::new();
    for _ in 0..line_no_width {
        buf.push_str(glyphs.get(GlyphKind::Hbar));
    }
    buf.push_str(glyphs.get(GlyphKind::Hbar));
    buf.push_str(glyphs.get(GlyphKind::Rbot));
    buf.flush_line(sink)
}

fn emit_footer_line(
    sink: &mut dyn Write,
    colors: &dyn ColorProvider,
    kind: &str,
    text: &str,
    index: Option<usize>,
    line_no_width: u32,
) -> Result<(), RenderError> {
    let mut buf = RowBuffer::new();
    buf.push_spaces(line_no_width.saturating_sub(kind.len() as u32).saturating_sub(1));
    buf.push_str(colors.color(ColorKind::Note));
    buf.push_str(kind);
    buf.push(':');
    buf.push_str(colors.color(ColorKind::Reset));
    buf.push(' ');
    if let Some(i) = index {
        buf.push_str(&format!("{i}. "));
    }
    buf.push_str(text);
    buf.flush_line(sink)
}
