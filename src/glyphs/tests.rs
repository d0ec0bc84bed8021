use super::*;
use crate::config::CharSet;

#[test]
fn ascii_and_unicode_agree_on_role_count() {
    assert_eq!(GlyphSet::ASCII.get(GlyphKind::Vbar), "|");
    assert_eq!(GlyphSet::UNICODE.get(GlyphKind::Vbar), "│");
}

#[test]
fn charset_conversion_picks_the_right_set() {
    let ascii: GlyphSet = CharSet::Ascii.into();
    let unicode: GlyphSet = CharSet::Unicode.into();
    assert_eq!(ascii.get(GlyphKind::Ellipsis), "...");
    assert_eq!(unicode.get(GlyphKind::Ellipsis), "…");
}

#[test]
fn ellipsis_width_is_positive_in_both_sets() {
    assert_eq!(GlyphSet::ASCII.ellipsis_width(), 3);
    assert_eq!(GlyphSet::UNICODE.ellipsis_width(), 1);
}
