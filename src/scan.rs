//! Corpus scanner: walks the root directory, classifies files by extension,
//! and reads each recognized source file into a `SourceFile`.
//!
//! Read and decode failures are reported as warnings and the file is
//! omitted; a broken file never aborts the scan and never counts toward
//! `files_scanned`. Results are sorted by path so every downstream line
//! number and ordering is reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use crate::lang::{self, LanguageSpec};
use crate::walk;

/// A source file read into memory. Immutable once constructed.
pub struct SourceFile {
    pub path: PathBuf,
    pub language: &'static LanguageSpec,
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Index of the first fingerprintable line: 1 when the file opens with
    /// a shebang, 0 otherwise. Shebang lines are excluded from fingerprints
    /// and previews but the rest of the file is still analyzed.
    pub fn content_start(&self) -> usize {
        if self.lines.first().is_some_and(|l| l.starts_with("#!")) {
            1
        } else {
            0
        }
    }
}

/// Read every recognized source file under `root`, sorted by path.
pub fn scan_sources(root: &Path) -> Vec<SourceFile> {
    let mut files: Vec<SourceFile> = Vec::new();

    for entry in walk::walk(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let Some(spec) = lang::detect(path) else {
            continue;
        };

        match fs::read_to_string(path) {
            Ok(content) => files.push(SourceFile {
                path: path.to_path_buf(),
                language: spec,
                lines: content.lines().map(String::from).collect(),
            }),
            Err(err) => {
                eprintln!("warning: {}: {err}", path.display());
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
