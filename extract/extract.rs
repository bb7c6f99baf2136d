//! Pull the answer sets out of whatever an answer set solver
//! printed, and write them back out one literal per line.
//!
//! Each supported solver has its own output convention; see
//! [`Solver::models`]. The extracted _model blocks_ are borrowed
//! slices of the solver's text, consumed immediately by a
//! [`write_models`] call or by the normalizer downstream.

mod patterns;
mod solver;
mod writer;

use std::io::{self, Read};

pub use solver::{InputFamily, Solver, UnknownSolver};
pub use writer::{literals_in_model, write_models, ModelFormat};

/// Select a solver by name and extract its models from `text`.
/// An unknown name is an error; a text with no models is not.
pub fn models<'a>(solver: &str, text: &'a str) -> Result<Vec<&'a str>, UnknownSolver> {
    Ok(solver.parse::<Solver>()?.models(text))
}

/// Read all of `input` as text. Solvers echo string constants
/// byte for byte, so bytes that are not UTF-8 become U+FFFD
/// rather than an error.
pub fn read_text<R: Read>(mut input: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
