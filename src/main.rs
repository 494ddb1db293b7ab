use std::process::ExitCode;

use clap::Parser;

use colony_scan::core::types::Strategy;
use colony_scan::perception::map::{load_sector_map, load_sector_map_json};
use colony_scan::report::run_scan;

#[derive(Parser)]
#[command(name = "colony-scan")]
#[command(about = "Find the top-k largest colonies on a toroidal sector map")]
struct Cli {
    /// Traversal algorithm: 1 (DFS) or 0 (BFS)
    algorithm: Strategy,

    /// Number of top colonies to report
    k: usize,

    /// Sector map file: whitespace-separated rows, or a JSON array of
    /// arrays for .json paths
    file: String,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let map = if cli.file.ends_with(".json") {
        load_sector_map_json(&cli.file)?
    } else {
        load_sector_map(&cli.file)?
    };

    let report = run_scan(&map, cli.algorithm, cli.k, &cli.file);
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
    }
    Ok(())
}
