mod cli;
mod dups;
mod fix;
mod funcs;
mod lang;
mod magic;
mod report;
mod rules;
mod scan;
mod suggest;
mod util;
mod walk;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { common, fixes } => {
            let target = common.path.unwrap_or_else(|| PathBuf::from("."));
            report::run(&target, common.json, fixes)
        }
        Commands::Learn { common, doc } => {
            let target = common.path.unwrap_or_else(|| PathBuf::from("."));
            rules::run(&target, common.json, doc)
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
