use super::*;

#[test]
fn empty_input_is_one_empty_line() {
    let src = Source::new("<unknown>", "");
    assert_eq!(src.line_count(), 1);
    assert_eq!(src.line_text(0), "");
    assert!(!src.line(0).unwrap().has_newline);
}

#[test]
fn trailing_newline_adds_a_final_empty_line() {
    let src = Source::new("<unknown>", "a\n");
    assert_eq!(src.line_count(), 2);
    assert_eq!(src.line_text(0), "a");
    assert!(src.line(0).unwrap().has_newline);
    assert_eq!(src.line_text(1), "");
    assert!(!src.line(1).unwrap().has_newline);
}

#[test]
fn no_trailing_newline_keeps_single_final_line() {
    let src = Source::new("<unknown>", "a\nb");
    assert_eq!(src.line_count(), 2);
    assert!(!src.line(1).unwrap().has_newline);
}

#[test]
fn line_for_char_finds_containing_line() {
    let src = Source::new("<unknown>", "line1\nline2\nline3");
    let (idx, _) = src.line_for_char(0);
    assert_eq!(idx, 0);
    let (idx, _) = src.line_for_char(6);
    assert_eq!(idx, 1);
    let (idx, _) = src.line_for_char(12);
    assert_eq!(idx, 2);
}

#[test]
fn newline_slot_resolves_to_the_line_it_terminates() {
    // "ab\ncd": line 0 spans chars [0,2), newline slot is char 2.
    let src = Source::new("<unknown>", "ab\ncd");
    let line0 = *src.line(0).unwrap();
    let (idx, line) = src.line_for_char(line0.char_end_slot());
    assert_eq!(idx, 0);
    assert_eq!(line.char_offset, 0);
}

#[test]
fn eof_slot_on_final_line_without_newline() {
    let src = Source::new("<unknown>", "ab");
    let line0 = *src.line(0).unwrap();
    assert!(!line0.has_newline);
    let (idx, _) = src.line_for_char(line0.char_end_slot());
    assert_eq!(idx, 0);
}

#[test]
fn byte_to_char_handles_multibyte_lines() {
    let src = Source::new("<unknown>", "\u{03B1}\u{03B2}\u{03B3}\n\u{03B4}\u{03B5}");
    // greek letters are 2 bytes each; byte 4 is start of 3rd char on line 0.
    assert_eq!(src.byte_to_char(4), 2);
    let line1_byte_start = src.line(1).unwrap().byte_offset;
    assert_eq!(src.byte_to_char(line1_byte_start + 2), src.line(1).unwrap().char_offset + 1);
}

#[test]
fn line_invariant_holds_across_lines() {
    let src = Source::new("<unknown>", "aa\nbbb\n\nc");
    for i in 0..src.line_count() - 1 {
        let l = *src.line(i).unwrap();
        let next = *src.line(i + 1).unwrap();
        assert_eq!(
            next.char_offset,
            l.char_offset + l.char_len + u32::from(l.has_newline)
        );
        assert_eq!(
            next.byte_offset,
            l.byte_offset + l.byte_len + u32::from(l.has_newline)
        );
    }
}
