use crate::common::*;

#[test]
fn test_indent_tab() {
    assert_eq!(IndentStyle::Tab.indent(0), "");
    assert_eq!(IndentStyle::Tab.indent(3), "\t\t\t");
}

#[test]
fn test_indent_spaces() {
    assert_eq!(IndentStyle::Spaces(2).indent(2), "    ");
}

#[test]
fn test_new_line_text() {
    assert_eq!(NewLineKind::Lf.as_str(), "\n");
    assert_eq!(NewLineKind::CrLf.as_str(), "\r\n");
    assert_eq!(NewLineKind::default(), NewLineKind::Lf);
}
