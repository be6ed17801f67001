use clap::Parser;
use colored::*;
use space_insight::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Space Insight - Booking Import and Location Scoring");
    println!("===================================================");
    println!();
    println!("Preview rental-space platform booking exports as canonical rows, and");
    println!("score a location from its nearest station, walking time and address.");
    println!();
    println!("USAGE:");
    println!("    space-insight <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Preview a platform booking export (UTF-8 or Shift-JIS)");
    println!("    score       Score a location and print the report as JSON");
    println!("    stations    List reference stations by passenger rank");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity");
    println!("    -q, --quiet      Only show errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Preview an export and check the detected columns:");
    println!("    space-insight import bookings.csv");
    println!();
    println!("    # Score a space 4 minutes from Shibuya:");
    println!("    space-insight score --station 渋谷駅 --walk 4 --address 東京都渋谷区道玄坂");
    println!();
    println!("    # Use a specific station dataset:");
    println!("    space-insight stations --dataset ./stations.json --top 10");
    println!();
    println!("The station dataset defaults to <data dir>/space-insight/stations.json");
    println!("and can be overridden with SPACE_INSIGHT_DATASET or --dataset.");
}
