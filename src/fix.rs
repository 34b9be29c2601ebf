//! Fix synthesis, invoked only when fix generation is requested.
//!
//! Produces replacement code plus per-site edit instructions. This module
//! only decides how the replacement should look; applying edits to disk is
//! a separate concern handled outside the analysis engine.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::dups::DuplicateCluster;
use crate::lang::{self, LanguageSpec};
use crate::magic::MagicNumber;
use crate::scan::SourceFile;
use crate::suggest::SuggestionKind;

/// One edit instruction: at `file:line`, `original` becomes `replacement`.
#[derive(Debug, Clone, Serialize)]
pub struct Replacement {
    pub file: PathBuf,
    pub line: usize,
    pub original: String,
    pub replacement: String,
}

/// Synthesized replacement code plus the edits that would wire it in.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub new_code: String,
    pub replacements: Vec<Replacement>,
}

/// The most frequent language among the cluster's occurrence files, ties
/// broken by first appearance in the cluster.
fn dominant_language(cluster: &DuplicateCluster) -> Option<&'static LanguageSpec> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    let mut order: Vec<&'static LanguageSpec> = Vec::new();

    for occurrence in &cluster.occurrences {
        let Some(spec) = lang::detect(&occurrence.file) else {
            continue;
        };
        if !order.iter().any(|s| s.name == spec.name) {
            order.push(spec);
        }
        *counts.entry(spec.name).or_insert(0) += 1;
    }

    // max_by_key keeps the last maximum; reversing makes ties resolve to
    // the language that appeared first in the cluster
    order.into_iter().rev().max_by_key(|spec| counts[spec.name])
}

/// Synthesize an extracted-function fix for a duplicate cluster: a helper
/// skeleton in the dominant language, and one call-site rewrite per
/// occurrence. Returns `None` when the language has no fix syntax.
pub fn duplicate_fix(cluster: &DuplicateCluster) -> Option<Fix> {
    let spec = dominant_language(cluster)?;
    let name = spec.helper_name();
    let new_code = spec.function_skeleton(name, &cluster.preview)?;
    let call = spec.call_statement(name)?;

    let original = cluster
        .preview
        .first()
        .map(|l| l.trim().to_string())
        .unwrap_or_default();

    let replacements = cluster
        .occurrences
        .iter()
        .map(|occurrence| Replacement {
            file: occurrence.file.clone(),
            line: occurrence.start_line,
            original: original.clone(),
            replacement: call.clone(),
        })
        .collect();

    Some(Fix {
        kind: SuggestionKind::RemoveDuplicate,
        new_code,
        replacements,
    })
}

/// Constant name for an extracted literal: digits only, so `5_000_000`
/// becomes `EXTRACTED_5000000`.
fn const_name(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("EXTRACTED_{digits}")
}

/// Synthesize named-constant declarations for one file's magic numbers,
/// plus a replacement reference per literal. Repeated values share one
/// declaration. Returns `None` when the language has no fix syntax.
pub fn constant_fix(file: &SourceFile, numbers: &[MagicNumber]) -> Option<Fix> {
    if numbers.is_empty() {
        return None;
    }

    let mut declarations: Vec<String> = Vec::new();
    let mut declared: Vec<String> = Vec::new();
    let mut replacements: Vec<Replacement> = Vec::new();

    for number in numbers {
        let name = const_name(&number.value);
        if !declared.contains(&name) {
            declarations.push(file.language.const_decl(&name, &number.value)?);
            declared.push(name.clone());
        }
        replacements.push(Replacement {
            file: file.path.clone(),
            line: number.line,
            original: number.value.clone(),
            replacement: name,
        });
    }

    Some(Fix {
        kind: SuggestionKind::ExtractConstant,
        new_code: declarations.join("\n"),
        replacements,
    })
}

#[cfg(test)]
#[path = "fix_test.rs"]
mod tests;
