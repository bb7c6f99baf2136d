//! Normalize extracted models into a datastore for the query system.

use std::fs::File;
use std::io::{self, stdin, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use atty::Stream;
use clap::Parser;

use qsystem_datastore::Datastore;
use qsystem_extract::read_text;
use qsystem_tracer::{levels, trace, Trace};

#[derive(Parser)]
#[command(name = "qs-prep", about = "Turn extracted models into datastore facts")]
struct Args {
    /// Read models from this file instead of stdin.
    #[arg(short, long)]
    file: Option<String>,

    /// Report progress on stderr (extract, normalize, pipeline, or all).
    #[arg(short, long)]
    trace: Vec<Trace>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let trace = levels(&args.trace);
    if args.file.is_none() && atty::is(Stream::Stdin) {
        eprintln!("Reading models; terminate with Ctrl-D.");
    }

    let input = read_file(args.file.as_deref())?;
    let datastore = Datastore::from_text(&input);
    trace!(
        trace,
        Normalize,
        "Normalized {} fact(s) from {} model(s)",
        datastore.facts().len(),
        datastore.number_of_models()
    );

    let mut out = io::BufWriter::new(io::stdout().lock());
    write!(out, "{datastore}").context("Writing datastore")?;
    out.flush().context("Writing datastore")?;
    Ok(())
}

/// Read a file or standard input and return the content as a string.
fn read_file(filename: Option<&str>) -> Result<String> {
    match filename {
        None | Some("-") => read_text(stdin().lock()).context("Reading from stdin"),
        Some(filename) => File::open(Path::new(filename))
            .and_then(read_text)
            .with_context(|| format!("Reading {filename}")),
    }
}
