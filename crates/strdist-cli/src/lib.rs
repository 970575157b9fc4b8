//! # strdist command line
//!
//! Reads a population of strings and prints those similar to a target.
//!
//! - **error**: error types for the command line
//! - **logging**: tracing subscriber setup
//! - **population**: population input
//!
//! ## Usage
//!
//! ```text
//! strdist --case force-lower --min-len 4 hello < words.txt
//! strdist --config finder.json --max 5 --format json recieve -p words.txt
//! ```

pub mod error;
pub mod logging;
pub mod population;

pub use error::{Error, Result};

use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use strdist_core::{CaseMapper, Finder, FinderConfig, MatchResult};
use tracing::{debug, info};

/// Case policy as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    NoChange,
    ForceLower,
}

impl From<CaseArg> for CaseMapper {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::NoChange => CaseMapper::NoChange,
            CaseArg::ForceLower => CaseMapper::ForceLower,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `score<TAB>value` line per match
    Text,
    /// JSON array of matches
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "strdist")]
#[command(about = "Find strings similar to a target by n-gram Jaccard similarity")]
#[command(version)]
pub struct Args {
    /// String to look for
    pub target: String,

    /// Population file, one entry per line (reads stdin when omitted)
    #[arg(short, long)]
    pub population: Option<PathBuf>,

    /// JSON finder configuration (replaces the matching flags)
    #[arg(short, long, conflicts_with_all = ["ngram_len", "min_len", "threshold", "case"])]
    pub config: Option<PathBuf>,

    /// Characters per n-gram
    #[arg(short = 'n', long, default_value_t = 2)]
    pub ngram_len: usize,

    /// Minimum length, in characters, of the target and of any match
    #[arg(long, default_value_t = 0)]
    pub min_len: usize,

    /// Lowest accepted similarity score, between 0 and 1
    #[arg(short, long, default_value_t = 0.3)]
    pub threshold: f64,

    /// Case normalization applied before comparing
    #[arg(long, value_enum, default_value_t = CaseArg::NoChange)]
    pub case: CaseArg,

    /// Rank matches by score and keep at most this many (0 keeps all)
    #[arg(short, long)]
    pub max: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is unset (debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Finder configuration from `--config`, or else from the flags
    pub fn finder_config(&self) -> Result<FinderConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(FinderConfig::new(
                self.ngram_len,
                self.min_len,
                self.threshold,
                self.case.into(),
            )),
        }
    }
}

/// Load a JSON finder configuration file.
pub fn load_config(path: &Path) -> Result<FinderConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Match the population against the target and write the results to `out`.
///
/// `stdin` is only read when no population file was given.
pub fn run<R: BufRead, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<usize> {
    let finder = Finder::from_config(args.finder_config()?)?;

    let population = match &args.population {
        Some(path) => population::read_file(path)?,
        None => population::read_lines(stdin, "stdin")?,
    };
    info!(entries = population.len(), "population loaded");

    let matches = match args.max {
        Some(max_n) => finder.find_top_n(&args.target, &population, max_n),
        None => finder.find(&args.target, &population),
    };
    debug!(matched = matches.len(), target = %args.target, "matching done");

    write_matches(out, &matches, args.format)?;
    Ok(matches.len())
}

/// Render matches in the requested format.
pub fn write_matches<W: Write>(
    out: &mut W,
    matches: &[MatchResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for m in matches {
                writeln!(out, "{:.4}\t{}", m.score, m.value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
