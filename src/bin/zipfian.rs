//! Zipfian CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};

use zipfian::VERSION;
use zipfian::cli::args::*;
use zipfian::cli::commands::*;

/// Map the CLI verbosity onto a log level.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    }
}

fn main() {
    // Parse command line arguments using clap
    let args = ZipfianArgs::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    debug!("zipfian {VERSION}: {:?}", args.command);

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
