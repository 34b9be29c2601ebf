use super::data::RefactorReport;

fn separator(width: usize) -> String {
    "=".repeat(width)
}

/// Print the report as plain text: summary block, ranked suggestions, then
/// duplicate clusters with locations and a preview sample.
pub fn print_text(report: &RefactorReport) {
    let sep = separator(68);

    println!("{sep}");
    println!(" Refactoring Analysis");
    println!();
    println!(" Files scanned:        {:>42}", report.stats.files_scanned);
    println!(" Duplicate blocks:     {:>42}", report.stats.duplicate_blocks);
    println!(
        " Duplicated lines:     {:>42}",
        report.stats.total_duplicate_lines
    );
    println!(" Magic numbers:        {:>42}", report.stats.magic_numbers);
    println!(" Long functions:       {:>42}", report.stats.long_functions);
    println!("{sep}");

    if report.suggestions.is_empty() {
        println!();
        println!(" No suggestions. Nothing worth refactoring was found.");
        return;
    }

    println!();
    println!(" Suggestions (high first)");
    for (i, s) in report.suggestions.iter().enumerate() {
        println!();
        println!(" [{}] {:<6} {}", i + 1, s.priority.label(), s.title);
        println!("     {}", s.description);
        println!("     impact: {}", s.estimated_impact);
        if let Some(fix) = &s.fix {
            println!("     suggested code:");
            for line in fix.new_code.lines() {
                println!("       {line}");
            }
        }
    }

    if !report.duplicates.is_empty() {
        println!();
        println!("{sep}");
        println!(" Duplicate Blocks");
        for cluster in &report.duplicates {
            println!();
            println!(
                " {} lines x {} occurrences:",
                cluster.lines,
                cluster.occurrences.len()
            );
            for o in &cluster.occurrences {
                println!("   {}:{}-{}", o.file.display(), o.start_line, o.end_line);
            }
            println!(" Sample:");
            for line in cluster.preview.iter().take(5) {
                println!("   {}", line.trim_end());
            }
            if cluster.lines > 5 {
                println!("   ...");
            }
        }
        println!("{sep}");
    }
}
