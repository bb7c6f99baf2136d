//! Generate a datastore from the answer sets of a logic program,
//! then hand it to a Prolog interpreter for querying.
//!
//! The datastore is produced by a single process pipeline:
//! ```text
//! solver | qs-extract --solver=NAME | qs-prep > $QSYSTEM/qsystem_data.pl
//! ```
//! where grounded solvers (smodels, clasp) are preceded by `lparse`.
//! Nothing here reads the solver's output; the stage processes do.

mod config;
mod interpreter;
mod stage;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use qsystem_extract::{InputFamily, Solver, UnknownSolver};
use qsystem_tracer::{trace, Trace};

pub use config::{Config, Module, Platform, BASE_DIR_VAR};
pub use interpreter::{consult_goal, Interpreter, UnknownInterpreter};
pub use stage::{Pipeline, Stage};

/// Things that may go wrong before or while launching the pipeline.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    UnknownSolver(#[from] UnknownSolver),
    #[error(transparent)]
    UnknownInterpreter(#[from] UnknownInterpreter),
    #[error("{}: no such logic program", .0.display())]
    MissingSource(PathBuf),
    #[error("the {0} environment variable must name the query system directory")]
    MissingBaseDir(&'static str),
    #[error("unable to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("unable to write datastore {}", .path.display())]
    Datastore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryError {
    /// Process exit status reporting this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownSolver(_) => 3,
            Self::UnknownInterpreter(_) => 4,
            Self::MissingSource(_) => 5,
            Self::MissingBaseDir(_) => 6,
            Self::Launch { .. } | Self::Datastore { .. } => 1,
        }
    }
}

/// Grounder preceding the solvers of the grounded family.
const GROUNDER: &str = "lparse";

/// Lets the grounder accept classically negated literals.
const TRUE_NEGATION: &str = "--true-negation";

/// Builds and runs the query system's processes.
#[derive(Clone, Debug)]
pub struct QuerySystem {
    config: Config,
    trace: Trace,
}

impl QuerySystem {
    pub fn new(config: Config, trace: Trace) -> Self {
        Self { config, trace }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The stages that compute the answer sets of `file` with `solver`,
    /// and the solver they resolved to.
    pub fn solver_stages(
        &self,
        solver: &str,
        file: &Path,
    ) -> Result<(Solver, Vec<Stage>), QueryError> {
        if !file.exists() {
            return Err(QueryError::MissingSource(file.to_path_buf()));
        }
        let solver = solver.parse::<Solver>()?;
        let file = file.to_string_lossy();
        let stages = match solver.family() {
            InputFamily::Grounded => vec![
                Stage::new(GROUNDER).arg(TRUE_NEGATION).arg(file),
                Stage::new(solver.name()),
            ],
            InputFamily::Standalone => vec![Stage::new(solver.name()).arg(file)],
        };
        Ok((solver, stages))
    }

    /// The model extraction stage for `solver`, reading standard input.
    pub fn extract_stage(&self, solver: Solver) -> Stage {
        Stage::new(self.module(Module::Extractor)).arg(format!("--solver={solver}"))
    }

    /// The normalization stage, reading standard input.
    pub fn prep_stage(&self) -> Stage {
        Stage::new(self.module(Module::Normalizer))
    }

    /// solver | extractor | normalizer > datastore
    pub fn datastore_pipeline(&self, solver: &str, file: &Path) -> Result<Pipeline, QueryError> {
        let (solver, stages) = self.solver_stages(solver, file)?;
        Ok(Pipeline::new(stages)
            .then(self.extract_stage(solver))
            .then(self.prep_stage())
            .to_file(self.config.datastore()))
    }

    /// The interpreter, consulting the datastore and the queries.
    pub fn interpreter_stage(&self, interpreter: &str) -> Result<Stage, QueryError> {
        let interpreter = interpreter.parse::<Interpreter>()?;
        let files = [
            self.config.datastore(),
            self.config.module(Module::Queries),
        ];
        Ok(interpreter.consult(self.config.platform, &files))
    }

    /// Compute the answer sets of `file` and overwrite the datastore.
    pub fn generate_datastore(&self, solver: &str, file: &Path) -> Result<(), QueryError> {
        let pipeline = self.datastore_pipeline(solver, file)?;
        trace!(self.trace, Pipeline, "Generating datastore: {}", pipeline);
        for (program, status) in pipeline.run()? {
            if !status.success() {
                trace!(self.trace, Pipeline, "{} exited with {}", program, status);
            }
        }
        Ok(())
    }

    /// Run an interactive interpreter session over the datastore.
    pub fn invoke_interpreter(&self, interpreter: &str) -> Result<(), QueryError> {
        let stage = self.interpreter_stage(interpreter)?;
        self.run_interpreter(&stage)
    }

    /// Generate the datastore and query it. The interpreter is resolved
    /// first, so an unknown name leaves the previous datastore alone.
    pub fn run(&self, solver: &str, file: &Path, interpreter: &str) -> Result<(), QueryError> {
        let stage = self.interpreter_stage(interpreter)?;
        self.generate_datastore(solver, file)?;
        self.run_interpreter(&stage)
    }

    fn run_interpreter(&self, stage: &Stage) -> Result<(), QueryError> {
        trace!(self.trace, Pipeline, "Starting interpreter: {}", stage);
        let status = stage.run()?;
        trace!(self.trace, Pipeline, "{} exited with {}", stage.program, status);
        Ok(())
    }

    fn module(&self, module: Module) -> String {
        self.config.module(module).to_string_lossy().into_owned()
    }
}
