//! The closed set of answer set solvers whose output we understand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::patterns;

/// Requested a solver we know nothing about.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{0} is an undefined answer set solver")]
pub struct UnknownSolver(pub String);

/// Where a solver gets its input from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputFamily {
    /// Reads a program already grounded by `lparse`.
    Grounded,
    /// Reads the logic program directly.
    Standalone,
}

/// An answer set solver, identified by the name of its executable.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Solver {
    Dlv,
    Smodels,
    Clasp,
}

type Extractor = for<'a> fn(&'a str) -> Vec<&'a str>;

/// Name, input family, and model extraction pattern of each solver,
/// in declaration order.
static SOLVERS: [(Solver, &str, InputFamily, Extractor); 3] = [
    (Solver::Dlv, "dlv", InputFamily::Standalone, patterns::braces),
    (Solver::Smodels, "smodels", InputFamily::Grounded, patterns::stable_model_lines),
    (Solver::Clasp, "clasp", InputFamily::Grounded, patterns::numbered_answers),
];

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Dlv, Solver::Smodels, Solver::Clasp];

    fn entry(self) -> &'static (Solver, &'static str, InputFamily, Extractor) {
        &SOLVERS[self as usize]
    }

    /// The solver's executable (and selection) name.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn family(self) -> InputFamily {
        self.entry().2
    }

    /// Extract the model blocks from the complete text printed by
    /// this solver, in the order it printed them. An unsatisfiable
    /// program yields no blocks.
    pub fn models(self, text: &str) -> Vec<&str> {
        (self.entry().3)(text)
    }
}

impl FromStr for Solver {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SOLVERS
            .iter()
            .find(|(_, name, _, _)| *name == s)
            .map(|(solver, _, _, _)| *solver)
            .ok_or_else(|| UnknownSolver(String::from(s)))
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
