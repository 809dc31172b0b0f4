//! Command-line entry point.
//!
//! Reads one configuration document from standard input and writes the
//! estimated totals to standard output. With `--diagnose`, writes the cost
//! per operation of every reference layer instead.

use env_logger;
use fodlam::invocation::{run, Mode};
use log::error;
use std::env;
use std::io;
use std::path::Path;

fn main() {
    // Initialize logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = match args.len() {
        1 => Mode::Estimate,
        2 => match args[1].as_str() {
            "--diagnose" | "-d" => Mode::Diagnose,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                error!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        },
        _ => {
            print_usage();
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(mode, stdin.lock(), stdout.lock(), Path::new(".")) {
        error!("Estimation failed: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: fodlam [--diagnose] < config.json");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --diagnose   Print cost per operation of every reference layer");
    eprintln!("  -h, --help       Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to see how each layer was resolved.");
}
