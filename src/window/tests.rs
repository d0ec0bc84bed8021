use super::*;
use crate::cluster::{Cluster, LineLabel};
use crate::color::ColorKind;

fn label(col: u32, end_col: u32, msg_width: u32) -> LineLabel {
    LineLabel {
        col,
        start_col: col,
        end_col,
        draw_msg: true,
        multi: false,
        slot: None,
        message: String::new(),
        message_display_width: msg_width,
        color: ColorKind::Label,
        priority: 0,
        order: 0,
        span_len: end_col.saturating_sub(col),
    }
}

fn cluster(min_col: u32, arrow_len: u32, max_msg_width: u32, ll: Vec<LineLabel>) -> Cluster {
    Cluster {
        line_no: 0,
        margin_label: None,
        line_labels: ll,
        arrow_len,
        min_col,
        max_msg_width,
    }
}

#[test]
fn short_line_needs_no_windowing() {
    let text = "apple == orange;";
    let widths = WidthCache::build(text, 4, 1);
    let c = cluster(0, 16, 18, vec![label(0, 5, 18)]);
    let w = resolve_window(&c, &widths, 80, 1, 2, 1);
    assert_eq!(w.start_col, 0);
    assert_eq!(w.end_col, widths.len() as u32);
    assert!(!w.left_ellipsis);
    assert!(!w.right_ellipsis);
}

#[test]
fn zero_line_width_disables_windowing() {
    let text = "apple == orange;";
    let widths = WidthCache::build(text, 4, 1);
    let c = cluster(0, 16, 18, vec![label(0, 5, 18)]);
    let w = resolve_window(&c, &widths, 0, 1, 2, 1);
    assert_eq!(w.start_col, 0);
    assert_eq!(w.end_col, widths.len() as u32);
}

#[test]
fn long_line_with_label_near_the_end_truncates_the_left() {
    let mut text = String::new();
    for _ in 0..100 {
        text.push_str("apple == ");
    }
    text.push_str("orange");
    let widths = WidthCache::build(&text, 4, 1);
    let len = widths.len() as u32;
    let arrow_len = len;
    let c = cluster(len - 6, arrow_len, 7, vec![label(len - 6, len, 7)]);
    let w = resolve_window(&c, &widths, 80, 1, 0, 3);
    assert!(w.start_col > 0, "left side should be trimmed for a long line");
    assert!(w.left_ellipsis);
    assert_eq!(w.end_col, len);
}

#[test]
fn window_never_excludes_the_arrow_zone() {
    let text = "apple == orange;";
    let widths = WidthCache::build(text, 4, 1);
    let c = cluster(0, 16, 18, vec![label(0, 5, 18)]);
    let w = resolve_window(&c, &widths, 10, 1, 2, 1);
    assert!(w.end_col >= 16);
}
