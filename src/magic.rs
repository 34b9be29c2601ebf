//! Magic number detection: single pass per file looking for unexplained
//! numeric literals outside constant declarations.

use serde::Serialize;

use crate::lang::LanguageSpec;
use crate::scan::SourceFile;
use crate::util::mask_strings;

/// A literal needs at least this many digits to be worth naming.
const MIN_DIGITS: usize = 3;

/// Common values that are never flagged, regardless of digit count.
const ALLOWED_VALUES: &[&str] = &["0", "1", "2", "10", "100", "1000"];

/// An unexplained numeric literal found on a line. `line` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct MagicNumber {
    pub line: usize,
    pub value: String,
}

/// Whether a line opens a constant declaration and is assumed already named.
/// Either the first token is one of the language's constant keywords, or the
/// line assigns to an ALL_CAPS identifier (the Python convention).
fn is_constant_decl(trimmed: &str, spec: &LanguageSpec) -> bool {
    let first = trimmed.split_whitespace().next().unwrap_or("");
    if spec.const_keywords.contains(&first) {
        return true;
    }

    if let Some((lhs, _)) = trimmed.split_once('=') {
        let name = lhs.trim().trim_end_matches(':');
        if !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return true;
        }
    }
    false
}

/// Extract qualifying decimal literals from a masked line.
///
/// A token qualifies when it is a standalone decimal run (underscore
/// separators allowed) of at least `MIN_DIGITS` digits. Tokens adjacent to
/// `.` or alphabetic characters (floats, hex/binary literals, typed
/// suffixes, identifiers) never qualify.
fn literals_in(masked: &str) -> Vec<String> {
    let bytes = masked.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        // reject digits glued to an identifier or a float's integer part
        if i > 0 {
            let prev = bytes[i - 1];
            if prev.is_ascii_alphanumeric() || prev == b'_' || prev == b'.' {
                i += 1;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                continue;
            }
        }

        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
            i += 1;
        }
        // trailing '.' or alpha means float, hex prefix, or suffixed literal
        if i < bytes.len() && (bytes[i] == b'.' || bytes[i].is_ascii_alphabetic()) {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'.') {
                i += 1;
            }
            continue;
        }

        let token = &masked[start..i];
        let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() >= MIN_DIGITS && !ALLOWED_VALUES.contains(&digits.as_str()) {
            found.push(token.to_string());
        }
    }
    found
}

/// Single pass over one file. Comment-only lines and constant declarations
/// are skipped entirely; string literal contents are masked before the line
/// is tokenized.
pub fn detect_magic_numbers(file: &SourceFile) -> Vec<MagicNumber> {
    let mut numbers = Vec::new();

    for (idx, line) in file.lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || file.language.is_comment_line(trimmed) {
            continue;
        }
        if is_constant_decl(trimmed, file.language) {
            continue;
        }

        let mut masked = mask_strings(line);
        // drop trailing line comments so their digits are not counted
        if let Some(pos) = file
            .language
            .line_comments
            .iter()
            .filter_map(|m| masked.find(m))
            .min()
        {
            masked.truncate(pos);
        }

        for value in literals_in(&masked) {
            numbers.push(MagicNumber {
                line: idx + 1,
                value,
            });
        }
    }
    numbers
}

#[cfg(test)]
#[path = "magic_test.rs"]
mod tests;
