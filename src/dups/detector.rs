use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::Serialize;

use crate::scan::SourceFile;

/// Minimum extractable unit: no block smaller than this is ever reported.
pub const MIN_BLOCK_LINES: usize = 5;

/// Maximum locations before a pattern is considered boilerplate and skipped.
const MAX_OCCURRENCES: usize = 100;

/// A place where a duplicated block appears. Lines are 1-based inclusive.
#[derive(Debug, Clone, Serialize)]
pub struct Occurrence {
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
}

/// All occurrences of one fingerprint across the corpus.
///
/// Invariants: `occurrences.len() >= 2` and `lines >= MIN_BLOCK_LINES`.
/// `preview` holds the verbatim text of the first occurrence.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateCluster {
    pub fingerprint: u64,
    pub lines: usize,
    pub occurrences: Vec<Occurrence>,
    pub preview: Vec<String>,
}

impl DuplicateCluster {
    /// Total lines covered by this cluster across all occurrences.
    pub fn total_lines(&self) -> usize {
        self.lines * self.occurrences.len()
    }
}

/// A set of (file_index, line_offset) pairs identifying where a window appears.
type LocationSet = Vec<(usize, usize)>;

/// FNV-1a over the window's trimmed lines, with a separator byte between
/// lines so shifted line boundaries cannot collide. Trimming makes the
/// fingerprint insensitive to indentation and line-ending whitespace.
fn fingerprint_window(lines: &[String]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325; // FNV offset basis
    for line in lines {
        for byte in line.trim().as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(0x100000001b3); // FNV prime
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Extractability filter, applied before a window is fingerprinted.
///
/// Windows dominated by import/export/require boilerplate, or that are
/// mostly blank and comment lines, are never duplicate candidates even
/// when repeated verbatim.
fn is_extractable(window: &[String], file: &SourceFile) -> bool {
    if let Some(first) = window.iter().find(|l| !l.trim().is_empty()) {
        let trimmed = first.trim();
        if trimmed.starts_with("import")
            || trimmed.starts_with("export")
            || trimmed.starts_with("require")
        {
            return false;
        }
    }

    let non_code = window
        .iter()
        .filter(|l| {
            let trimmed = l.trim();
            trimmed.is_empty() || file.language.is_comment_line(trimmed)
        })
        .count();
    // more than 70% blank or comment-only lines disqualifies the window
    non_code * 10 <= window.len() * 7
}

/// Phase 1: slide a `MIN_BLOCK_LINES` window over every file (shebang line
/// excluded) and fingerprint each extractable window. Returns a map from
/// fingerprint to all (file_index, line_offset) locations.
fn fingerprint_all_windows(files: &[SourceFile]) -> HashMap<u64, LocationSet> {
    let mut map: HashMap<u64, LocationSet> = HashMap::new();
    for (file_idx, file) in files.iter().enumerate() {
        let start = file.content_start();
        if file.lines.len() < start + MIN_BLOCK_LINES {
            continue;
        }
        for offset in start..=(file.lines.len() - MIN_BLOCK_LINES) {
            let window = &file.lines[offset..offset + MIN_BLOCK_LINES];
            if !is_extractable(window, file) {
                continue;
            }
            let hash = fingerprint_window(window);
            map.entry(hash).or_default().push((file_idx, offset));
        }
    }
    map
}

/// Phase 2: keep fingerprints with 2+ distinct locations and identical text.
///
/// After sort/dedup, overlapping windows within one file collapse to the
/// earliest start, then each group is verified by comparing actual trimmed
/// content (guards against FNV collisions). Patterns with more than
/// `MAX_OCCURRENCES` hits are dropped as boilerplate. Returns a reverse
/// lookup (`LocationSet` → fingerprint) for the extension phase plus the
/// sorted list of valid entries.
fn validate_fingerprints(
    map: HashMap<u64, LocationSet>,
    files: &[SourceFile],
) -> (HashMap<LocationSet, u64>, Vec<(u64, LocationSet)>) {
    let mut location_to_hash: HashMap<LocationSet, u64> = HashMap::new();
    let mut valid: Vec<(u64, LocationSet)> = Vec::new();

    for (hash, mut locations) in map {
        if locations.len() < 2 || locations.len() > MAX_OCCURRENCES {
            continue;
        }
        locations.sort();
        locations.dedup();
        // repeated-content runs match themselves at every offset within one
        // file; keep only the earliest of each overlapping same-file window
        let mut kept: LocationSet = Vec::new();
        for (file_idx, offset) in locations {
            if let Some((last_file, last_offset)) = kept.last()
                && *last_file == file_idx
                && offset < last_offset + MIN_BLOCK_LINES
            {
                continue;
            }
            kept.push((file_idx, offset));
        }
        let locations = kept;
        if locations.len() < 2 {
            continue;
        }

        let (f0, o0) = locations[0];
        let first: Vec<&str> = files[f0].lines[o0..o0 + MIN_BLOCK_LINES]
            .iter()
            .map(|l| l.trim())
            .collect();
        let all_match = locations[1..].iter().all(|(fi, off)| {
            files[*fi].lines[*off..*off + MIN_BLOCK_LINES]
                .iter()
                .map(|l| l.trim())
                .eq(first.iter().copied())
        });
        if !all_match {
            continue;
        }

        location_to_hash.insert(locations.clone(), hash);
        valid.push((hash, locations));
    }

    valid.sort_by(|a, b| a.1.cmp(&b.1));
    (location_to_hash, valid)
}

/// Extend a matched window backward by shifting all locations by -1 while
/// the shifted location set also matched. Consumed windows are recorded so
/// they are not re-emitted as separate clusters.
fn extend_backward(
    locations: &[(usize, usize)],
    location_to_hash: &HashMap<LocationSet, u64>,
    consumed: &mut HashSet<LocationSet>,
) -> (LocationSet, usize) {
    let mut start_locs = locations.to_vec();
    let mut backward = 0usize;
    loop {
        if start_locs.iter().any(|(_, o)| *o == 0) {
            break;
        }
        let prev: LocationSet = start_locs.iter().map(|(f, o)| (*f, o - 1)).collect();
        if location_to_hash.contains_key(&prev) {
            consumed.insert(prev.clone());
            start_locs = prev;
            backward += 1;
        } else {
            break;
        }
    }
    (start_locs, backward)
}

/// Extend a matched window forward by shifting all locations by +1 while
/// the shifted location set also matched.
fn extend_forward(
    locations: &[(usize, usize)],
    location_to_hash: &HashMap<LocationSet, u64>,
    consumed: &mut HashSet<LocationSet>,
) -> usize {
    let mut current = locations.to_vec();
    let mut forward = 0usize;
    loop {
        let next: LocationSet = current.iter().map(|(f, o)| (*f, o + 1)).collect();
        if location_to_hash.contains_key(&next) {
            consumed.insert(next.clone());
            current = next;
            forward += 1;
        } else {
            break;
        }
    }
    forward
}

/// Build a `DuplicateCluster` from extended start locations and block size.
/// Offsets map to 1-based line numbers; the preview is the verbatim slice
/// of the first occurrence.
fn build_cluster(files: &[SourceFile], start_locs: &[(usize, usize)], size: usize) -> DuplicateCluster {
    let occurrences: Vec<Occurrence> = start_locs
        .iter()
        .map(|(file_idx, offset)| Occurrence {
            file: files[*file_idx].path.clone(),
            start_line: offset + 1,
            end_line: offset + size,
        })
        .collect();

    let (f0, o0) = start_locs[0];
    let preview: Vec<String> = files[f0].lines[o0..o0 + size].to_vec();
    let window = &files[f0].lines[o0..o0 + MIN_BLOCK_LINES];

    DuplicateCluster {
        fingerprint: fingerprint_window(window),
        lines: size,
        occurrences,
        preview,
    }
}

/// Detect duplicate clusters across the whole corpus.
///
/// Phase 1 fingerprints every extractable `MIN_BLOCK_LINES` window. Phase 2
/// keeps fingerprints with 2+ verified-identical locations. Phase 3 merges
/// overlapping windows: a sliding window finds the *minimum* duplicate, so
/// each location set is extended backward and forward while the shifted set
/// also matched, yielding the maximal duplicated region. The consumed set
/// guarantees one cluster per literal duplicate region.
///
/// Clusters are sorted by first occurrence (path, start line) so reports
/// are stable across runs.
pub fn detect_clusters(files: &[SourceFile]) -> Vec<DuplicateCluster> {
    let map = fingerprint_all_windows(files);
    let (location_to_hash, valid) = validate_fingerprints(map, files);

    let mut consumed: HashSet<LocationSet> = HashSet::new();
    let mut clusters: Vec<DuplicateCluster> = Vec::new();

    for (_hash, locations) in &valid {
        if consumed.contains(locations) {
            continue;
        }
        consumed.insert(locations.clone());

        let (start_locs, backward) = extend_backward(locations, &location_to_hash, &mut consumed);
        let forward = extend_forward(locations, &location_to_hash, &mut consumed);
        let size = MIN_BLOCK_LINES + backward + forward;

        clusters.push(build_cluster(files, &start_locs, size));
    }

    clusters.sort_by(|a, b| {
        let ka = (&a.occurrences[0].file, a.occurrences[0].start_line);
        let kb = (&b.occurrences[0].file, b.occurrences[0].start_line);
        ka.cmp(&kb)
    });
    clusters
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod tests;
