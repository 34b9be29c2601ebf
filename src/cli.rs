/// CLI argument definitions for the `rlens` command.
///
/// Defines the subcommands and their arguments using the `clap`
/// derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "rlens", version, about = "Refactoring analysis tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the analysis commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a corpus for duplicate blocks, magic numbers, and long functions
    #[command(long_about = "\
Analyze a source corpus and rank refactoring suggestions.

Finds three kinds of issues:
  remove-duplicate    identical blocks of 5+ lines across the corpus
  extract-constant    unexplained numeric literals of 3+ digits
  reduce-complexity   functions longer than 50 lines

Suggestions are ranked high, then medium, then low. With --fixes, duplicate
and magic-number suggestions carry synthesized replacement code; this tool
never edits the analyzed sources itself.

Examples:
  rlens analyze                  # analyze current directory
  rlens analyze src/ --fixes     # include synthesized fix snippets
  rlens analyze --json           # machine-readable output")]
    Analyze {
        #[command(flatten)]
        common: CommonArgs,

        /// Synthesize fix snippets for suggestions that support them
        #[arg(long)]
        fixes: bool,
    },

    /// Distill high-value findings into rules appended to the style document
    #[command(long_about = "\
Analyze a source corpus and distill the highest-value findings into durable
style rules, appended to the style document (STYLEGUIDE.md under the
analyzed root by default).

Each run appends at most 10 rules: up to 5 from high-priority suggestions
and up to 5 from duplicate clusters. A clean corpus appends nothing and
never creates the document.

Examples:
  rlens learn                    # learn from current directory
  rlens learn --doc notes/STYLE.md
  rlens learn --json             # print learned rules as JSON")]
    Learn {
        #[command(flatten)]
        common: CommonArgs,

        /// Style document to append to (default: STYLEGUIDE.md under the root)
        #[arg(long)]
        doc: Option<PathBuf>,
    },
}
