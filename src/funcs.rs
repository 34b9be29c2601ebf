//! Long function detection.
//!
//! Function boundaries come from a per-language adapter on `LanguageSpec`:
//! brace-scoped languages locate a header and brace-count to the matching
//! close (string literals masked), indent-scoped languages extend the body
//! while lines stay indented deeper than the header. Adding a language means
//! one more `LanguageSpec` entry, not another branch here.

use std::path::PathBuf;

use serde::Serialize;

use crate::lang::{FunctionSyntax, LanguageSpec};
use crate::scan::SourceFile;
use crate::util::{indent_level, mask_strings};

/// Functions longer than this are flagged.
pub const LONG_FUNCTION_LINES: usize = 50;

/// Functions longer than this are high priority.
pub const VERY_LONG_FUNCTION_LINES: usize = 100;

/// Control-flow keywords that must not be mistaken for function headers
/// by the C-family heuristic.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "else", "do", "catch", "return", "case",
];

/// A function that exceeded the length threshold. Lines are 1-based inclusive.
#[derive(Debug, Clone, Serialize)]
pub struct LongFunction {
    pub file: PathBuf,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl LongFunction {
    /// Signature through closing line, inclusive.
    pub fn length(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Whether a trimmed line opens a function, using the language's markers
/// or the C-family heuristic when no markers exist.
fn is_function_header(trimmed: &str, spec: &LanguageSpec) -> bool {
    if spec.is_comment_line(trimmed) {
        return false;
    }
    match spec.function_syntax {
        FunctionSyntax::Indent => spec.function_markers.iter().any(|m| trimmed.starts_with(m)),
        FunctionSyntax::Braces => {
            if !spec.function_markers.is_empty() {
                spec.function_markers.iter().any(|m| trimmed.contains(m))
            } else {
                is_c_family_function(trimmed)
            }
        }
    }
}

/// Heuristic for C/C++/Java/C# headers: the line contains '(' and ends with
/// '{' or ')', and the first word is not a control keyword.
///
/// Known limitations: multiline declarations with '{' on its own line are
/// missed, and function-like macros are treated as functions.
fn is_c_family_function(trimmed: &str) -> bool {
    if !trimmed.contains('(') {
        return false;
    }
    if !(trimmed.ends_with('{') || trimmed.ends_with(')')) {
        return false;
    }

    let first_word = trimmed.split_whitespace().next().unwrap_or("");
    let first_word = first_word.trim_start_matches('*');
    !CONTROL_KEYWORDS.contains(&first_word)
}

/// Extract the function name from a header line: the token after the first
/// matching marker, or (C-family) the token before the first '('.
fn function_name(trimmed: &str, spec: &LanguageSpec) -> String {
    for marker in spec.function_markers {
        if let Some(pos) = trimmed.find(marker) {
            let after = &trimmed[pos + marker.len()..];
            let name: String = after
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !name.is_empty() {
                return name;
            }
        }
    }

    if let Some(paren_pos) = trimmed.find('(') {
        let before = trimmed[..paren_pos].trim();
        if let Some(name) = before.split_whitespace().next_back() {
            let name = name.trim_start_matches('*');
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    "<anonymous>".to_string()
}

/// Find the body end for a brace-scoped function starting at `start`.
/// Returns the index of the line holding the matching closing brace
/// (or the last line when the file ends first).
fn brace_body_end(lines: &[String], start: usize) -> usize {
    let mut depth: isize = 0;
    let mut found_open = false;

    for (j, line) in lines.iter().enumerate().skip(start) {
        let masked = mask_strings(line);
        for ch in masked.bytes() {
            if ch == b'{' {
                depth += 1;
                found_open = true;
            } else if ch == b'}' {
                depth -= 1;
            }
        }
        if found_open && depth <= 0 {
            return j;
        }
    }
    lines.len() - 1
}

/// Find the body end for an indent-scoped function starting at `start`.
/// The body extends while non-blank lines are indented at least as deeply
/// as the first body line; blank lines inside the body do not end it.
/// Returns the index of the last body line.
fn indent_body_end(lines: &[String], start: usize) -> usize {
    let header_indent = indent_level(&lines[start]);

    // locate the first non-blank body line to fix the body indent
    let mut body_indent = None;
    for line in lines.iter().skip(start + 1) {
        if !line.trim().is_empty() {
            let indent = indent_level(line);
            if indent > header_indent {
                body_indent = Some(indent);
            }
            break;
        }
    }
    let Some(body_indent) = body_indent else {
        return start; // header with no body
    };

    let mut last = start;
    for (j, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if indent_level(line) < body_indent {
            break;
        }
        last = j;
    }
    last
}

/// Detect all functions longer than `LONG_FUNCTION_LINES` in one file.
pub fn detect_long_functions(file: &SourceFile) -> Vec<LongFunction> {
    let spec = file.language;
    let lines = &file.lines;
    let mut found = Vec::new();

    let mut i = file.content_start();
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if !is_function_header(trimmed, spec) {
            i += 1;
            continue;
        }

        let end = match spec.function_syntax {
            FunctionSyntax::Braces => brace_body_end(lines, i),
            FunctionSyntax::Indent => indent_body_end(lines, i),
        };
        let length = end - i + 1;
        if length > LONG_FUNCTION_LINES {
            found.push(LongFunction {
                file: file.path.clone(),
                name: function_name(trimmed, spec),
                start_line: i + 1,
                end_line: end + 1,
            });
        }
        i = end + 1;
    }
    found
}

#[cfg(test)]
#[path = "funcs_test.rs"]
mod tests;
