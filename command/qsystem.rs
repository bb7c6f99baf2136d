//! Compute the answer sets of a logic program, store them as
//! Prolog facts, and start an interpreter to query them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use qsystem_pipeline::{Config, Platform, QueryError, QuerySystem};
use qsystem_tracer::{levels, Trace};

#[derive(Parser)]
#[command(name = "qsystem", about = "Query the answer sets of a logic program from Prolog")]
struct Args {
    /// The Prolog interpreter to use (sic or swi).
    #[arg(short, long, default_value = "sic")]
    prolog: String,

    /// The answer set solver to use (dlv, smodels, or clasp).
    #[arg(short, long, default_value = "dlv")]
    solver: String,

    /// The logic program to use as a knowledge base.
    #[arg(short, long)]
    file: PathBuf,

    /// The query system directory; defaults to $QSYSTEM.
    #[arg(long)]
    base: Option<PathBuf>,

    /// Report progress on stderr (extract, normalize, pipeline, or all).
    #[arg(short, long)]
    trace: Vec<Trace>,
}

fn run(args: &Args) -> Result<(), QueryError> {
    let config = match &args.base {
        Some(base) => Config::new(base, Platform::current()),
        None => Config::from_env()?,
    };
    QuerySystem::new(config, levels(&args.trace)).run(&args.solver, &args.file, &args.prolog)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qsystem: {err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
