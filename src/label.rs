//! Label model (§4.3 / C3): normalizing user-facing [`Label`]s into
//! char-indexed [`LabelInfo`] and grouping them per source.

use crate::color::ColorKind;
use crate::config::{Config, IndexType};
use crate::error::{RenderError, SourceId};
use crate::source::SourceCache;

/// A user-supplied labeled range, half-open `[start, end)` at this boundary.
///
/// Positions are interpreted as byte or character offsets per
/// [`Config::index_type`]; `end == start` denotes a zero-width label.
#[derive(Clone, Debug)]
pub struct Label {
    pub start: u32,
    pub end: u32,
    pub source_id: SourceId,
    pub message: String,
    pub color: ColorKind,
    pub order: i32,
    pub priority: i32,
}

impl Label {
    pub fn new(source_id: SourceId, start: u32, end: u32, message: impl Into<String>) -> Self {
        Label {
            start,
            end: end.max(start),
            source_id,
            message: message.into(),
            color: ColorKind::Label,
            order: 0,
            priority: 0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A label normalized to character offsets, clipped into its source's lines.
#[derive(Clone, Debug)]
pub struct LabelInfo {
    pub start_char: u32,
    pub end_char: u32,
    pub start_line: usize,
    pub end_line: usize,
    pub source_id: SourceId,
    pub message: String,
    pub message_display_width: u32,
    pub color: ColorKind,
    pub order: i32,
    pub priority: i32,
}

impl LabelInfo {
    pub fn multi(&self) -> bool {
        self.start_line != self.end_line
    }

    pub fn span_len(&self) -> u32 {
        self.end_char - self.start_char
    }
}

/// All labels referring to one source (§3 Group).
#[derive(Clone, Debug)]
pub struct Group {
    pub src: SourceId,
    pub inline_labels: Vec<LabelInfo>,
    pub multi_labels: Vec<LabelInfo>,
    pub first_char: u32,
    pub last_char: u32,
    pub margin_width: u32,
}

impl Group {
    pub fn first_line(&self) -> usize {
        self.inline_labels
            .iter()
            .chain(&self.multi_labels)
            .map(|l| l.start_line)
            .min()
            .unwrap_or(0)
    }

    pub fn last_line(&self) -> usize {
        self.inline_labels
            .iter()
            .chain(&self.multi_labels)
            .map(|l| l.end_line)
            .max()
            .unwrap_or(0)
    }
}

/// Convert a byte or char position into a character offset clipped into the
/// line containing it, including the newline slot (§4.3 steps 1-2).
fn normalize_position(
    source: &crate::source::Source,
    pos: u32,
    index_type: IndexType,
) -> u32 {
    let char_pos = match index_type {
        IndexType::Byte => source.byte_to_char(pos),
        IndexType::Char => pos,
    };
    let (_, line) = source.line_for_char(char_pos);
    char_pos.clamp(line.char_offset, line.char_end_slot())
}

/// Normalize raw labels into per-source [`Group`]s (§4.3).
///
/// # Errors
/// Returns [`RenderError::InvalidSource`] if a label names an unknown
/// `source_id`.
pub fn build_groups(
    labels: &[Label],
    sources: &SourceCache,
    config: &Config,
) -> Result<Vec<Group>, RenderError> {
    let mut order: Vec<SourceId> = Vec::new();
    let mut by_source: Vec<(SourceId, Vec<LabelInfo>)> = Vec::new();

    for label in labels {
        let source = sources
            .get(label.source_id)
            .ok_or(RenderError::InvalidSource(label.source_id))?;

        let start_char = normalize_position(source, label.start, config.index_type);
        let end_char = normalize_position(source, label.end, config.index_type).max(start_char);
        let (start_line, _) = source.line_for_char(start_char);
        let (end_line, _) = source.line_for_char(end_char);

        let message_display_width: u32 = crate::width::char_widths(
            &label.message,
            config.tab_width,
            config.ambi_width,
        )
        .into_iter()
        .sum();

        let info = LabelInfo {
            start_char,
            end_char,
            start_line,
            end_line,
            source_id: label.source_id,
            message: label.message.clone(),
            message_display_width,
            color: label.color,
            order: label.order,
            priority: label.priority,
        };

        if !order.contains(&label.source_id) {
            order.push(label.source_id);
        }
        match by_source.iter_mut().find(|(id, _)| *id == label.source_id) {
            Some((_, v)) => v.push(info),
            None => by_source.push((label.source_id, vec![info])),
        }
    }

    let slot_width = config.slot_width();
    let mut groups = Vec::with_capacity(order.len());
    for src in order {
        let infos = by_source
            .iter()
            .find(|(id, _)| *id == src)
            .map(|(_, v)| v.clone())
            .unwrap_or_default();

        let mut inline_labels = Vec::new();
        let mut multi_labels = Vec::new();
        for info in infos {
            if info.multi() {
                multi_labels.push(info);
            } else {
                inline_labels.push(info);
            }
        }
        // Stable sort by descending span length (§4.3 step 4).
        multi_labels.sort_by(|a, b| b.span_len().cmp(&a.span_len()));

        let first_char = inline_labels
            .iter()
            .chain(&multi_labels)
            .map(|l| l.start_char)
            .min()
            .unwrap_or(0);
        let last_char = inline_labels
            .iter()
            .chain(&multi_labels)
            .map(|l| l.end_char)
            .max()
            .unwrap_or(0);
        let margin_width = if multi_labels.is_empty() {
            0
        } else {
            (multi_labels.len() as u32 + 1) * slot_width
        };

        groups.push(Group {
            src,
            inline_labels,
            multi_labels,
            first_char,
            last_char,
            margin_width,
        });
    }

    Ok(groups)
}
