//! Write extracted models one literal per line, each model
//! closed by a delimiter line.

use std::io::{self, Write};

/// How to write a model.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ModelFormat {
    /// Bare literals, closed by `::endmodel`.
    #[default]
    Text,
    /// Literals as A-Prolog facts, closed by `%%endmodel`.
    Code,
}

impl ModelFormat {
    pub const ALL: [ModelFormat; 2] = [ModelFormat::Text, ModelFormat::Code];

    /// The line that closes a model in this format.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Text => "::endmodel",
            Self::Code => "%%endmodel",
        }
    }

    /// Is `token` the model delimiter of any format?
    pub fn is_delimiter(token: &str) -> bool {
        Self::ALL.iter().any(|f| f.delimiter() == token)
    }
}

/// The literals making up a model block, in order,
/// stripped of their separating commas.
pub fn literals_in_model(block: &str) -> impl Iterator<Item = &str> {
    block
        .split_whitespace()
        .map(|literal| literal.trim_end_matches(','))
        .filter(|literal| !literal.is_empty())
}

/// Write every model in the given format. No models, no output.
pub fn write_models<'a, W: Write>(
    out: &mut W,
    models: impl IntoIterator<Item = &'a str>,
    format: ModelFormat,
) -> io::Result<()> {
    for model in models {
        for literal in literals_in_model(model) {
            match format {
                ModelFormat::Text => writeln!(out, "{literal}")?,
                ModelFormat::Code => writeln!(out, "{literal}.")?,
            }
        }
        writeln!(out, "{}", format.delimiter())?;
    }
    Ok(())
}
