use super::*;
use crate::label::{build_groups, Label};
use crate::source::{Source, SourceCache};

fn group_for(text: &str) -> Group {
    let mut cache = SourceCache::new();
    cache.insert(1, Source::new("<unknown>", text));
    let labels = vec![Label::new(1, 0, text.len() as u32, "illegal comparison")];
    build_groups(&labels, &cache, &Config::default()).unwrap().remove(0)
}

#[test]
fn opening_line_draws_a_top_corner_in_the_margin_slot() {
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::UNICODE;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 0, RowKind::Line, Some(0), false);
    assert!(row.starts_with(glyphs.get(GlyphKind::Ltop)));
}

#[test]
fn interior_line_without_a_pointer_is_a_plain_vertical_bar() {
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::UNICODE;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 1, RowKind::Ellipsis, None, false);
    assert!(row.starts_with(glyphs.get(GlyphKind::VbarGap)));
}

#[test]
fn closing_line_with_message_draws_a_crossing_corner() {
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::UNICODE;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 2, RowKind::Line, Some(0), true);
    assert!(row.starts_with(glyphs.get(GlyphKind::Lcross)));
}

#[test]
fn non_open_slot_on_an_unrelated_line_is_blank() {
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::UNICODE;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 3, RowKind::None, None, false);
    assert!(row.starts_with(glyphs.get(GlyphKind::Space)));
}

#[test]
fn ascii_top_corner_pads_with_hbar_not_space() {
    // Matches spec.md's S2 literal margin: ",-> apple", not ", > apple".
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::ASCII;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 0, RowKind::Line, Some(0), false);
    assert_eq!(row, ",->");
}

#[test]
fn ascii_interior_vbar_pads_with_space() {
    let group = group_for("apple\n==\norange");
    let glyphs = GlyphSet::ASCII;
    let config = Config::default();
    let row = render_margin(&group, &glyphs, &config, 1, RowKind::Ellipsis, None, false);
    assert_eq!(row, ":  ");
}
