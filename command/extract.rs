//! Read an answer set solver's output on standard input and
//! write its models one literal per line.

use std::io::{self, stdin, Write};

use anyhow::{Context as _, Result};
use atty::Stream;
use clap::Parser;

use qsystem_extract::{read_text, write_models, ModelFormat, Solver};
use qsystem_tracer::{levels, trace, Trace};

#[derive(Parser)]
#[command(name = "qs-extract", about = "Extract the models printed by an answer set solver")]
struct Args {
    /// The solver that produced the input (dlv, smodels, or clasp).
    #[arg(short, long, default_value = "dlv")]
    solver: String,

    /// Write models as A-Prolog code.
    #[arg(short, long)]
    aprolog: bool,

    /// Report progress on stderr (extract, normalize, pipeline, or all).
    #[arg(short, long)]
    trace: Vec<Trace>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let trace = levels(&args.trace);
    let solver = args.solver.parse::<Solver>()?;
    if atty::is(Stream::Stdin) {
        eprintln!("Reading {solver} output; terminate with Ctrl-D.");
    }

    let text = read_text(stdin().lock()).context("Reading from stdin")?;
    let models = solver.models(&text);
    trace!(trace, Extract, "Found {} {} model(s)", models.len(), solver);

    let format = if args.aprolog {
        ModelFormat::Code
    } else {
        ModelFormat::Text
    };
    let mut out = io::BufWriter::new(io::stdout().lock());
    write_models(&mut out, models, format).context("Writing models")?;
    out.flush().context("Writing models")?;
    Ok(())
}
