//! Analysis report module (`rlens analyze` command).
//!
//! Scans the corpus once, runs duplicate clustering plus the magic-number
//! and long-function heuristics, ranks the findings into suggestions, and
//! prints the result as text or JSON. Building the report is side-effect
//! free; only printing happens here.

mod builder;
mod data;
mod text;

use std::error::Error;
use std::path::Path;

pub use builder::build_report;
pub use data::{AnalyzeOptions, RefactorReport, Stats};

/// Entry point: build the report for `path` and print it.
pub fn run(path: &Path, json: bool, generate_fixes: bool) -> Result<(), Box<dyn Error>> {
    let options = AnalyzeOptions { generate_fixes };
    let report = build_report(path, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        text::print_text(&report);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
