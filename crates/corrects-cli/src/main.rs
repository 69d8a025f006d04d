//! Corrects CLI - accuracy scoring for trial exports.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = commands::score::run(cli.files, cli.suffix, cli.json, cli.verbose);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
