//! wdiffer CLI
//!
//! Word-level diff of two text files.

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "wdiffer")]
#[command(about = "wdiffer - Compare two files word by word", long_about = None)]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::diff::execute(cli.diff) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
