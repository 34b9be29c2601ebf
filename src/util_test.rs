use super::*;

#[test]
fn mask_strings_basic() {
    assert_eq!(
        mask_strings(r#"let s = "timeout 300";"#),
        r#"let s = "           ";"#
    );
    assert_eq!(
        mask_strings(r#"let c = '{'; if x {"#),
        r#"let c = ' '; if x {"#
    );
}

#[test]
fn mask_strings_escaped_quote() {
    assert_eq!(
        mask_strings(r#"let s = "he said \"300\"";"#),
        r#"let s = "               ";"#
    );
}

#[test]
fn mask_strings_empty() {
    assert_eq!(mask_strings(""), "");
}

#[test]
fn mask_strings_no_strings() {
    assert_eq!(mask_strings("let x = 42;"), "let x = 42;");
}

#[test]
fn mask_strings_unclosed_string() {
    // Unclosed string: mask everything after the quote
    assert_eq!(mask_strings(r#"let s = "hello"#), r#"let s = "     "#);
}

#[test]
fn indent_level_spaces() {
    assert_eq!(indent_level("    x = 1"), 4);
    assert_eq!(indent_level("x = 1"), 0);
    assert_eq!(indent_level(""), 0);
}

#[test]
fn indent_level_tabs() {
    assert_eq!(indent_level("\tx = 1"), 4);
    assert_eq!(indent_level("\t  x = 1"), 6);
}
