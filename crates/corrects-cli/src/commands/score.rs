//! Score command - fill in accuracy and write scored copies.

use std::path::PathBuf;

use colored::Colorize;
use corrects::{Corrects, ProcessReport};

pub fn run(
    files: Vec<PathBuf>,
    suffix: String,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let corrects = Corrects::new().with_suffix(suffix);

    let mut reports: Vec<ProcessReport> = Vec::with_capacity(files.len());

    for file in &files {
        if !json_output {
            println!(
                "{} {}",
                "Scoring".cyan().bold(),
                file.display().to_string().white()
            );
        }

        // A failure on any file aborts the whole run
        let report = corrects.process(file)?;

        if !json_output {
            print_report(&report, verbose);
        }

        reports.push(report);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn print_report(report: &ProcessReport, verbose: bool) {
    let summary = &report.summary;

    println!(
        "  {} rows: {} correct, {} non-responses, {} unchanged",
        summary.rows.to_string().white().bold(),
        summary.correct.to_string().green(),
        summary.non_responses.to_string().yellow(),
        summary.unchanged.to_string().blue()
    );

    if verbose {
        println!("  hash: {}", report.source.hash);
        println!("  size: {} bytes", report.source.size_bytes);
    }

    println!(
        "{} {}",
        "Saved to".green().bold(),
        report.output.display().to_string().white()
    );
    println!();
}
