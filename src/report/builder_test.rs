use std::fs;
use std::path::Path;

use super::*;
use crate::suggest::{Priority, SuggestionKind};

const BODY_6: &str = "function process(data) {\n    const parsed = parse(data);\n    const checked = validate(parsed);\n    store(checked);\n    notify(checked);\n}\n";

fn analyze(root: &Path) -> RefactorReport {
    build_report(root, &AnalyzeOptions::default()).unwrap()
}

fn analyze_with_fixes(root: &Path) -> RefactorReport {
    build_report(
        root,
        &AnalyzeOptions {
            generate_fixes: true,
        },
    )
    .unwrap()
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

#[test]
fn duplicate_block_in_three_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();
    fs::write(dir.path().join("c.js"), BODY_6).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].occurrences.len(), 3);
    assert_eq!(report.duplicates[0].lines, 6);

    let dups: Vec<_> = report
        .suggestions
        .iter()
        .filter(|s| s.kind == SuggestionKind::RemoveDuplicate)
        .collect();
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].priority, Priority::High);
    assert_eq!(report.stats.duplicate_blocks, 1);
    assert_eq!(report.stats.total_duplicate_lines, 18);
}

#[test]
fn two_occurrences_still_high_priority() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.suggestions[0].priority, Priority::High);
}

#[test]
fn total_duplicate_lines_invariant() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();
    fs::write(dir.path().join("c.js"), BODY_6).unwrap();

    let report = analyze(dir.path());
    let expected: usize = report
        .duplicates
        .iter()
        .map(|c| c.lines * c.occurrences.len())
        .sum();
    assert_eq!(report.stats.total_duplicate_lines, expected);
}

#[test]
fn files_scanned_excludes_ignored_dirs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "let x = 1;\n").unwrap();
    fs::write(dir.path().join("b.ts"), "let y = 2;\n").unwrap();
    fs::write(dir.path().join("c.ts"), "let z = 3;\n").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.ts"), BODY_6).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.stats.files_scanned, 3);
}

#[test]
fn magic_numbers_yield_one_medium_suggestion() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.ts"),
        "let ttl = 86400000;\nlet cap = 999999;\n",
    )
    .unwrap();

    let report = analyze(dir.path());
    assert!(report.stats.magic_numbers >= 2);

    let magic: Vec<_> = report
        .suggestions
        .iter()
        .filter(|s| s.kind == SuggestionKind::ExtractConstant)
        .collect();
    assert_eq!(magic.len(), 1);
    assert_eq!(magic[0].priority, Priority::Medium);
}

#[test]
fn common_values_do_not_count() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.ts"),
        "let a = 0;\nlet b = 1;\nlet c = 2;\nlet d = 10;\nlet e = 100;\n",
    )
    .unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.stats.magic_numbers, 0);
}

#[test]
fn fifty_five_line_function_is_medium() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), rust_fn("worker", 55)).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.stats.long_functions, 1);

    let long: Vec<_> = report
        .suggestions
        .iter()
        .filter(|s| s.kind == SuggestionKind::ReduceComplexity)
        .collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].priority, Priority::Medium);
    assert!(long[0].title.contains("worker"));
}

#[test]
fn hundred_five_line_function_is_high() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), rust_fn("monster", 105)).unwrap();

    let report = analyze(dir.path());
    let long = report
        .suggestions
        .iter()
        .find(|s| s.kind == SuggestionKind::ReduceComplexity)
        .unwrap();
    assert_eq!(long.priority, Priority::High);
}

#[test]
fn forty_five_line_function_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), rust_fn("fine", 45)).unwrap();

    let report = analyze(dir.path());
    assert_eq!(report.stats.long_functions, 0);
    assert!(report.suggestions.is_empty());
}

#[test]
fn import_only_files_produce_no_duplicates() {
    let imports = "import { a } from './a';\nimport { b } from './b';\nimport { c } from './c';\nimport { d } from './d';\nimport { e } from './e';\nimport { f } from './f';\n";
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), imports).unwrap();
    fs::write(dir.path().join("b.ts"), imports).unwrap();
    fs::write(dir.path().join("c.ts"), imports).unwrap();

    let report = analyze(dir.path());
    assert!(report.duplicates.is_empty());
    assert_eq!(report.stats.total_duplicate_lines, 0);
}

#[test]
fn clean_corpus_yields_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn tiny() {\n    run();\n}\n").unwrap();

    let report = analyze(dir.path());
    assert!(report.duplicates.is_empty());
    assert!(report.suggestions.is_empty());
    assert_eq!(report.stats.duplicate_blocks, 0);
    assert_eq!(report.stats.magic_numbers, 0);
    assert_eq!(report.stats.long_functions, 0);
}

#[test]
fn suggestions_ordered_high_medium_low() {
    let dir = tempfile::tempdir().unwrap();
    // high: duplicate block; medium: 55-line function; low: one magic number
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();
    fs::write(dir.path().join("c.rs"), rust_fn("worker", 55)).unwrap();
    fs::write(dir.path().join("d.ts"), "let ttl = 86400000;\n").unwrap();

    let report = analyze(dir.path());
    let priorities: Vec<_> = report.suggestions.iter().map(|s| s.priority).collect();
    assert_eq!(
        priorities,
        vec![Priority::High, Priority::Medium, Priority::Low]
    );
}

#[test]
fn fixes_attached_only_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();

    let plain = analyze(dir.path());
    assert!(plain.suggestions[0].fix.is_none());

    let fixed = analyze_with_fixes(dir.path());
    let fix = fixed.suggestions[0].fix.as_ref().unwrap();
    assert!(fix.new_code.contains("function extractedBlock()"));
    assert_eq!(fix.replacements.len(), 2);
}

#[test]
fn reduce_complexity_never_gets_a_fix() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), rust_fn("worker", 55)).unwrap();

    let report = analyze_with_fixes(dir.path());
    let long = report
        .suggestions
        .iter()
        .find(|s| s.kind == SuggestionKind::ReduceComplexity)
        .unwrap();
    assert!(long.fix.is_none());
}

#[test]
fn summary_mentions_counts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();

    let report = analyze(dir.path());
    assert!(report.summary.contains("2 files"));
    assert!(report.summary.contains("1 duplicate block"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), BODY_6).unwrap();
    fs::write(dir.path().join("b.js"), BODY_6).unwrap();
    fs::write(dir.path().join("c.ts"), "let ttl = 86400000;\nlet cap = 999999;\n").unwrap();

    let first = serde_json::to_string(&analyze(dir.path())).unwrap();
    let second = serde_json::to_string(&analyze(dir.path())).unwrap();
    assert_eq!(first, second);
}
