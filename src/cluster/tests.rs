use super::*;
use crate::config::Config;
use crate::label::build_groups;
use crate::label::Label;
use crate::source::{Source, SourceCache};

fn single_group(text: &str, labels: Vec<Label>, config: &Config) -> Group {
    let mut cache = SourceCache::new();
    cache.insert(1, Source::new("<unknown>", text));
    build_groups(&labels, &cache, config).unwrap().remove(0)
}

#[test]
fn two_inline_labels_on_one_line_both_appear_in_one_cluster() {
    let config = Config::default();
    let text = "apple == orange;";
    let group = single_group(
        text,
        vec![
            Label::new(1, 0, 5, "This is an apple"),
            Label::new(1, 10, 16, "This is an orange"),
        ],
        &config,
    );
    let src = Source::new("<unknown>", text);
    let line = *src.line(0).unwrap();
    let widths = WidthCache::build(text, config.tab_width, config.ambi_width);
    let render = assemble_line(&group, &line, 0, &widths, &config, 1);
    match render {
        LineRender::Clusters(clusters) => {
            assert_eq!(clusters.len(), 1);
            assert_eq!(clusters[0].line_labels.len(), 2);
            assert!(clusters[0].margin_label.is_none());
        }
        _ => panic!("expected clusters"),
    }
}

#[test]
fn interior_line_of_a_multiline_label_is_an_ellipsis_row() {
    let config = Config::default();
    let text = "apple\n==\norange";
    let group = single_group(text, vec![Label::new(1, 0, 15, "illegal comparison")], &config);
    let src = Source::new("<unknown>", text);
    let line = *src.line(1).unwrap();
    let widths = WidthCache::build(src.line_text(1), config.tab_width, config.ambi_width);
    let render = assemble_line(&group, &line, 1, &widths, &config, 1);
    assert!(matches!(render, LineRender::Ellipsis));
}

#[test]
fn unrelated_line_is_skipped() {
    let config = Config::default();
    let text = "a\nb\nc";
    let group = single_group(text, vec![Label::new(1, 0, 1, "only a")], &config);
    let src = Source::new("<unknown>", text);
    let line = *src.line(2).unwrap();
    let widths = WidthCache::build(src.line_text(2), config.tab_width, config.ambi_width);
    let render = assemble_line(&group, &line, 2, &widths, &config, 1);
    assert!(matches!(render, LineRender::Skip));
}

#[test]
fn multiline_start_gets_margin_label_excluded_from_line_labels() {
    let config = Config::default();
    let text = "apple\n==\norange";
    let group = single_group(text, vec![Label::new(1, 0, 15, "illegal comparison")], &config);
    let src = Source::new("<unknown>", text);
    let line = *src.line(0).unwrap();
    let widths = WidthCache::build(src.line_text(0), config.tab_width, config.ambi_width);
    let render = assemble_line(&group, &line, 0, &widths, &config, 1);
    match render {
        LineRender::Clusters(clusters) => {
            assert_eq!(clusters.len(), 1);
            assert!(clusters[0].margin_label.is_some());
            assert!(clusters[0].line_labels.is_empty());
        }
        _ => panic!("expected clusters"),
    }
}

#[test]
fn multiline_end_with_message_is_kept_in_line_labels() {
    let config = Config::default();
    let text = "apple\n==\norange";
    let group = single_group(text, vec![Label::new(1, 0, 15, "illegal comparison")], &config);
    let src = Source::new("<unknown>", text);
    let line = *src.line(2).unwrap();
    let widths = WidthCache::build(src.line_text(2), config.tab_width, config.ambi_width);
    let render = assemble_line(&group, &line, 2, &widths, &config, 1);
    match render {
        LineRender::Clusters(clusters) => {
            assert_eq!(clusters.len(), 1);
            assert!(clusters[0].margin_label.is_some());
            assert_eq!(clusters[0].line_labels.len(), 1);
            assert!(clusters[0].line_labels[0].draw_msg);
        }
        _ => panic!("expected clusters"),
    }
}
