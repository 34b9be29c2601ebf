//! Rule learning (`rlens learn` command).
//!
//! Distills the highest-value findings of one analysis run into durable
//! style-guide entries. `learn_rules` is pure; `append_rules` is the only
//! side effect and appends (never truncates) to the style document. The two
//! are separate so report-derived learning can be tested without touching
//! the filesystem.

use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use serde::Serialize;

use crate::report::{AnalyzeOptions, RefactorReport, build_report};
use crate::suggest::{Priority, SuggestionKind};

/// Default style document, relative to the analyzed root.
pub const STYLE_DOC: &str = "STYLEGUIDE.md";

/// At most this many rules are distilled from high-priority suggestions.
const MAX_SUGGESTION_RULES: usize = 5;

/// At most this many rules are distilled from duplicate clusters.
const MAX_CLUSTER_RULES: usize = 5;

/// Source references per rule are capped at this many entries.
const MAX_SOURCE_REFS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    #[serde(rename = "anti-pattern")]
    AntiPattern,
    #[serde(rename = "best-practice")]
    BestPractice,
}

impl RuleKind {
    pub fn tag(&self) -> &'static str {
        match self {
            RuleKind::AntiPattern => "anti-pattern",
            RuleKind::BestPractice => "best-practice",
        }
    }
}

/// A durable style-guide entry. Produced once per analysis run and never
/// mutated after being appended.
#[derive(Debug, Clone, Serialize)]
pub struct LearnedRule {
    pub rule: String,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub added_at: String,
}

/// Distill learned rules from one report: high-priority suggestions first
/// (source: up to three affected files), then duplicate clusters (source:
/// up to three `file:line` references, in cluster order). Explicit cap of
/// `MAX_SUGGESTION_RULES + MAX_CLUSTER_RULES` rules per run.
pub fn learn_rules(report: &RefactorReport) -> Vec<LearnedRule> {
    let added_at = Utc::now().to_rfc3339();
    let mut rules: Vec<LearnedRule> = Vec::new();

    let high = report
        .suggestions
        .iter()
        .filter(|s| s.priority == Priority::High)
        .take(MAX_SUGGESTION_RULES);
    for suggestion in high {
        let source = suggestion
            .files
            .iter()
            .take(MAX_SOURCE_REFS)
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let kind = match suggestion.kind {
            SuggestionKind::ExtractConstant => RuleKind::BestPractice,
            _ => RuleKind::AntiPattern,
        };
        rules.push(LearnedRule {
            rule: suggestion.title.clone(),
            source,
            kind,
            added_at: added_at.clone(),
        });
    }

    for cluster in report.duplicates.iter().take(MAX_CLUSTER_RULES) {
        let source = cluster
            .occurrences
            .iter()
            .take(MAX_SOURCE_REFS)
            .map(|o| format!("{}:{}", o.file.display(), o.start_line))
            .collect::<Vec<_>>()
            .join(", ");
        rules.push(LearnedRule {
            rule: format!(
                "Do not repeat this {}-line block; it appears {} times and belongs in a shared helper",
                cluster.lines,
                cluster.occurrences.len()
            ),
            source,
            kind: RuleKind::AntiPattern,
            added_at: added_at.clone(),
        });
    }

    rules
}

/// Append a "LEARNED RULES" section to the style document, creating the
/// file only when there is something to write. Zero rules leave the
/// document untouched, and never create it.
pub fn append_rules(style_doc: &Path, rules: &[LearnedRule]) -> Result<(), Box<dyn Error>> {
    if rules.is_empty() {
        return Ok(());
    }

    let date = Local::now().format("%Y-%m-%d");
    let mut section = String::from("\n## LEARNED RULES\n\n");
    for rule in rules {
        section.push_str(&format!(
            "- [{}] {} (`{}`, {})\n",
            rule.kind.tag(),
            rule.rule,
            rule.source,
            date
        ));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(style_doc)?;
    file.write_all(section.as_bytes())?;
    Ok(())
}

/// Entry point: analyze `path`, distill rules, and persist them to the
/// style document (default `STYLEGUIDE.md` under the analyzed root).
pub fn run(path: &Path, json: bool, style_doc: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let report = build_report(path, &AnalyzeOptions::default())?;
    let rules = learn_rules(&report);

    let doc = style_doc.unwrap_or_else(|| path.join(STYLE_DOC));
    append_rules(&doc, &rules)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    if rules.is_empty() {
        println!("No high-value findings; style document unchanged.");
    } else {
        println!("Learned {} rules, appended to {}", rules.len(), doc.display());
        for rule in &rules {
            println!("  [{}] {}", rule.kind.tag(), rule.rule);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
