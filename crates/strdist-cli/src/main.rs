//! strdist - Main Entry Point
//!
//! Usage:
//!     strdist --case force-lower hello < words.txt
//!     strdist --max 3 --format json -p words.txt hello

use clap::Parser;
use std::io;
use strdist_cli::{logging, run, Args};
use tracing::debug;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_with_filter(&args.log_level);
    debug!("Starting strdist v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, stdin.lock(), &mut out)?;

    Ok(())
}
