use std::path::{Path, PathBuf};

use super::*;
use crate::lang;

fn src(name: &str, content: &str) -> SourceFile {
    SourceFile {
        path: PathBuf::from(name),
        language: lang::detect(Path::new(name)).unwrap(),
        lines: content.lines().map(String::from).collect(),
    }
}

/// A brace-scoped function with `total` lines including signature and close.
fn rust_fn(name: &str, total: usize) -> String {
    let mut s = format!("fn {name}() {{\n");
    for i in 0..total - 2 {
        s.push_str(&format!("    let v{i} = compute(v);\n"));
    }
    s.push_str("}\n");
    s
}

/// An indent-scoped function with `total` lines including the header.
fn py_fn(name: &str, total: usize) -> String {
    let mut s = format!("def {name}():\n");
    for i in 0..total - 1 {
        s.push_str(&format!("    v{i} = compute(v)\n"));
    }
    s
}

#[test]
fn fifty_five_line_function_flagged() {
    let file = src("a.rs", &rust_fn("big_one", 55));
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "big_one");
    assert_eq!(found[0].length(), 55);
    assert_eq!(found[0].start_line, 1);
    assert_eq!(found[0].end_line, 55);
}

#[test]
fn forty_five_line_function_not_flagged() {
    let file = src("a.rs", &rust_fn("fine", 45));
    assert!(detect_long_functions(&file).is_empty());
}

#[test]
fn boundary_fifty_line_function_not_flagged() {
    let file = src("a.rs", &rust_fn("edge", 50));
    assert!(detect_long_functions(&file).is_empty());
}

#[test]
fn hundred_five_line_function_flagged() {
    let file = src("a.rs", &rust_fn("huge", 105));
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].length(), 105);
}

#[test]
fn python_long_function_flagged() {
    let content = format!("{}\ntop_level = 1\n", py_fn("handler", 60));
    let file = src("a.py", &content);
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "handler");
    assert_eq!(found[0].length(), 60);
}

#[test]
fn python_body_survives_blank_lines() {
    let mut content = String::from("def spaced():\n");
    for i in 0..30 {
        content.push_str(&format!("    a{i} = {i}\n\n"));
    }
    // 1 header + 30 body lines separated by blanks: last body line is line 60
    let file = src("a.py", &content);
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].end_line, 60);
}

#[test]
fn nested_braces_do_not_end_the_body() {
    let mut s = String::from("fn nested() {\n");
    for _ in 0..26 {
        s.push_str("    if cond {\n        work();\n    }\n");
    }
    s.push_str("}\n");
    // 1 + 26*3 + 1 = 80 lines
    let file = src("a.rs", &s);
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].length(), 80);
}

#[test]
fn braces_in_strings_are_masked() {
    let mut s = String::from("fn strings() {\n");
    for i in 0..53 {
        s.push_str(&format!("    log(\"close }} brace {i}\");\n"));
    }
    s.push_str("}\n");
    let file = src("a.rs", &s);
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].length(), 55);
}

#[test]
fn multiple_functions_flagged_independently() {
    let content = format!("{}\n{}", rust_fn("short_one", 20), rust_fn("long_one", 70));
    let file = src("a.rs", &content);
    let found = detect_long_functions(&file);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "long_one");
}

#[test]
fn c_family_header_heuristic() {
    let c = lang::detect(Path::new("a.c")).unwrap();
    assert!(is_function_header("int main(int argc, char **argv) {", c));
    assert!(is_function_header("static void process(void *arg) {", c));
    assert!(!is_function_header("if (x > 0) {", c));
    assert!(!is_function_header("while (running) {", c));
    assert!(!is_function_header("x = call(y);", c));
}

#[test]
fn function_name_extraction() {
    let rs = lang::detect(Path::new("a.rs")).unwrap();
    assert_eq!(function_name("pub fn run_all(x: i32) {", rs), "run_all");

    let py = lang::detect(Path::new("a.py")).unwrap();
    assert_eq!(function_name("def handle(req):", py), "handle");

    let c = lang::detect(Path::new("a.c")).unwrap();
    assert_eq!(function_name("char *get_name(int id) {", c), "get_name");
}
