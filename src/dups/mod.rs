//! Duplicate block detection: fingerprint candidate windows per file, group
//! identical fingerprints across the corpus, and merge overlapping windows
//! into maximal clusters.

mod detector;

pub use detector::{DuplicateCluster, MIN_BLOCK_LINES, Occurrence, detect_clusters};
