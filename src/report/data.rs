/// Data structures for the analysis report.
///
/// Populated by the builder and consumed by the text and JSON formatters,
/// the rule learner, and any external fix applier.
use serde::Serialize;

use crate::dups::DuplicateCluster;
use crate::suggest::Suggestion;

/// Options for one analysis run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// Synthesize fix snippets for suggestions that support them.
    pub generate_fixes: bool,
}

/// Aggregate counters for one run.
///
/// Invariant: `total_duplicate_lines` equals the sum over all clusters of
/// `cluster.lines * cluster.occurrences.len()`.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub files_scanned: usize,
    pub duplicate_blocks: usize,
    pub total_duplicate_lines: usize,
    pub magic_numbers: usize,
    pub long_functions: usize,
}

/// The full result of one analysis run. Value object owned by the call
/// that produced it; nothing is cached between runs.
#[derive(Debug, Clone, Serialize)]
pub struct RefactorReport {
    pub duplicates: Vec<DuplicateCluster>,
    pub suggestions: Vec<Suggestion>,
    pub stats: Stats,
    pub summary: String,
}
