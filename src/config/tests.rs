use super::*;

#[test]
fn defaults_match_spec_table() {
    let c = Config::default();
    assert!(c.cross_gap);
    assert!(!c.compact);
    assert!(c.underlines);
    assert!(c.multiline_arrows);
    assert_eq!(c.tab_width, 4);
    assert_eq!(c.ambi_width, 1);
    assert!(c.align_messages);
}

#[test]
fn compact_halves_slot_and_arrow_width() {
    let mut c = Config::default();
    assert_eq!(c.slot_width(), 2);
    assert_eq!(c.extra_arrow_len(), 2);
    c.compact = true;
    assert_eq!(c.slot_width(), 1);
    assert_eq!(c.extra_arrow_len(), 1);
}

#[test]
fn zero_line_width_disables_windowing() {
    let mut c = Config::default();
    assert!(c.windowing_enabled());
    c.line_width = 0;
    assert!(!c.windowing_enabled());
}
