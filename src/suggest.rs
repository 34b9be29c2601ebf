//! Suggestion records and the priority ranker.

use std::path::PathBuf;

use serde::Serialize;

use crate::fix::Fix;

/// Priority tier. Declaration order drives `Ord`, so sorting puts
/// `High` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// What kind of refactoring a suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    #[serde(rename = "remove-duplicate")]
    RemoveDuplicate,
    #[serde(rename = "extract-constant")]
    ExtractConstant,
    #[serde(rename = "reduce-complexity")]
    ReduceComplexity,
}

/// An actionable refactoring recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    pub estimated_impact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

/// Priority for an `extract-constant` suggestion, from the per-file count.
pub fn magic_priority(count: usize) -> Priority {
    match count {
        0 | 1 => Priority::Low,
        2..=4 => Priority::Medium,
        _ => Priority::High,
    }
}

/// Priority for a `reduce-complexity` suggestion, from the function length.
pub fn long_function_priority(length: usize) -> Priority {
    if length > crate::funcs::VERY_LONG_FUNCTION_LINES {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Sort suggestions so every `high` precedes every `medium` precedes every
/// `low`. The sort is stable: within a tier, detection order (duplicates,
/// then magic numbers, then long functions) is preserved. Suggestions of
/// different kinds are never merged or deduplicated.
pub fn rank(suggestions: &mut [Suggestion]) {
    suggestions.sort_by_key(|s| s.priority);
}

#[cfg(test)]
#[path = "suggest_test.rs"]
mod tests;
