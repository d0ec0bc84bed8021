use super::*;

#[test]
fn row_buffer_accumulates_and_flushes() {
    let mut buf = RowBuffer::new();
    buf.push_str("abc");
    buf.push(' ');
    buf.push_spaces(2);
    let mut out = Vec::new();
    buf.flush(&mut out).unwrap();
    assert_eq!(out, b"abc   ");
    assert!(buf.is_empty());
}

#[test]
fn flush_line_appends_newline() {
    let mut buf = RowBuffer::new();
    buf.push_str("row");
    let mut out = Vec::new();
    buf.flush_line(&mut out).unwrap();
    assert_eq!(out, b"row\n");
}

#[test]
fn write_line_helper_writes_text_and_newline() {
    let mut out = Vec::new();
    write_line(&mut out, "hello").unwrap();
    assert_eq!(out, b"hello\n");
}
