//! Report builder: scans the corpus once and constructs a `RefactorReport`.
//!
//! Each source file is read once; duplicate clustering runs at corpus level
//! after the scan, while magic numbers and long functions are pure per-file
//! passes whose counts are summed here. Suggestions are generated in
//! detection order (duplicates, magic numbers, long functions) and then
//! ranked by priority tier.

use std::collections::HashSet;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::dups::{DuplicateCluster, detect_clusters};
use crate::fix;
use crate::funcs::{LongFunction, detect_long_functions};
use crate::magic::detect_magic_numbers;
use crate::scan::{SourceFile, scan_sources};
use crate::suggest::{
    Priority, Suggestion, SuggestionKind, long_function_priority, magic_priority, rank,
};

use super::data::{AnalyzeOptions, RefactorReport, Stats};

/// Scan `root` and build the full report. Pure aside from reading sources;
/// printing and rule persistence live in the subcommand entry points.
pub fn build_report(root: &Path, options: &AnalyzeOptions) -> Result<RefactorReport, Box<dyn Error>> {
    let files = scan_sources(root);

    let clusters = detect_clusters(&files);
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for cluster in &clusters {
        suggestions.push(duplicate_suggestion(cluster, options.generate_fixes));
    }

    let mut magic_total = 0usize;
    for file in &files {
        let numbers = detect_magic_numbers(file);
        if numbers.is_empty() {
            continue;
        }
        magic_total += numbers.len();

        let fix = if options.generate_fixes {
            fix::constant_fix(file, &numbers)
        } else {
            None
        };
        suggestions.push(magic_suggestion(file, numbers.len(), fix));
    }

    let mut long_total = 0usize;
    for file in &files {
        for function in detect_long_functions(file) {
            long_total += 1;
            suggestions.push(long_function_suggestion(&function));
        }
    }

    rank(&mut suggestions);

    let total_duplicate_lines: usize = clusters.iter().map(|c| c.total_lines()).sum();
    let stats = Stats {
        files_scanned: files.len(),
        duplicate_blocks: clusters.len(),
        total_duplicate_lines,
        magic_numbers: magic_total,
        long_functions: long_total,
    };
    let summary = format!(
        "Scanned {} files: {} duplicate blocks ({} lines), {} magic numbers, {} long functions.",
        stats.files_scanned,
        stats.duplicate_blocks,
        stats.total_duplicate_lines,
        stats.magic_numbers,
        stats.long_functions
    );

    Ok(RefactorReport {
        duplicates: clusters,
        suggestions,
        stats,
        summary,
    })
}

/// One `remove-duplicate` suggestion per cluster, always high priority
/// regardless of occurrence count.
fn duplicate_suggestion(cluster: &DuplicateCluster, generate_fixes: bool) -> Suggestion {
    let files = unique_files(cluster);
    let saved = cluster.lines * (cluster.occurrences.len() - 1);

    Suggestion {
        kind: SuggestionKind::RemoveDuplicate,
        priority: Priority::High,
        title: format!(
            "Extract a {}-line block duplicated in {} places",
            cluster.lines,
            cluster.occurrences.len()
        ),
        description: format!(
            "The same {}-line block appears at {}. Move it into a shared helper and call it from each site.",
            cluster.lines,
            cluster
                .occurrences
                .iter()
                .map(|o| format!("{}:{}", o.file.display(), o.start_line))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        files,
        lines: Some(cluster.lines),
        estimated_impact: format!("removes {saved} duplicated lines"),
        fix: if generate_fixes {
            fix::duplicate_fix(cluster)
        } else {
            None
        },
    }
}

/// Occurrence files without repeats, in cluster order.
fn unique_files(cluster: &DuplicateCluster) -> Vec<PathBuf> {
    let mut seen: HashSet<&Path> = HashSet::new();
    cluster
        .occurrences
        .iter()
        .filter(|o| seen.insert(o.file.as_path()))
        .map(|o| o.file.clone())
        .collect()
}

/// At most one `extract-constant` suggestion per file, aggregating all of
/// that file's magic numbers.
fn magic_suggestion(file: &SourceFile, count: usize, fix: Option<fix::Fix>) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::ExtractConstant,
        priority: magic_priority(count),
        title: format!(
            "Name {} magic number{} in {}",
            count,
            if count == 1 { "" } else { "s" },
            file.path.display()
        ),
        description: format!(
            "{} unexplained numeric literal{} should become named constants.",
            count,
            if count == 1 { "" } else { "s" }
        ),
        files: vec![file.path.clone()],
        lines: None,
        estimated_impact: format!("{count} literals become self-documenting"),
        fix,
    }
}

/// Exactly one `reduce-complexity` suggestion per qualifying function.
/// Manual decomposition cannot be safely automated, so no fix is attached.
fn long_function_suggestion(function: &LongFunction) -> Suggestion {
    let length = function.length();
    Suggestion {
        kind: SuggestionKind::ReduceComplexity,
        priority: long_function_priority(length),
        title: format!(
            "Split function '{}' ({} lines) in {}",
            function.name,
            length,
            function.file.display()
        ),
        description: format!(
            "'{}' spans lines {}-{} ({} lines). Break it into smaller, focused functions.",
            function.name, function.start_line, function.end_line, length
        ),
        files: vec![function.file.clone()],
        lines: Some(length),
        estimated_impact: format!("a {length}-line function becomes reviewable"),
        fix: None,
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
