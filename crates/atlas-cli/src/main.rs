//! `atlas` — a road-map engine driven by a line-oriented command language.
//!
//! Reads commands from standard input (or a file), maintains the map, and
//! prints requested route descriptions to standard output.  Every rejected
//! line is reported as `ERROR <line-number>` on standard error; processing
//! always continues with the next line.

mod driver;
mod parser;


use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use atlas_map::Atlas;

#[derive(Parser)]
#[command(name = "atlas", version, about = "In-memory road map with national routes")]
struct Args {
    /// Command file to execute; standard input when omitted.
    input: Option<PathBuf>,

    /// Suppress per-line ERROR reports.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut atlas = Atlas::new();
    let mut out = BufWriter::new(io::stdout().lock());
    let err: Box<dyn Write> = if args.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr().lock())
    };

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            driver::run(&mut atlas, BufReader::new(file), &mut out, err)?;
        }
        None => {
            driver::run(&mut atlas, io::stdin().lock(), &mut out, err)?;
        }
    }
    out.flush()?;
    Ok(())
}
