//! Normalize extracted models into a _datastore_: a sorted set of
//! `pos(M,Atom).` and `neg(M,Atom).` facts followed by a single
//! `number_of_models(N).` fact, ready to be consulted by Prolog.

mod literal;

use std::fmt;

use qsystem_extract::ModelFormat;

pub use literal::{wrap, Fact, Literal, Polarity};

/// One token of a model-delimited literal stream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    /// Closes the current model.
    Delimiter,
    Literal(Literal<'a>),
    /// A token with no atom in it, e.g. a lone `.`.
    Empty,
}

impl<'a> Token<'a> {
    pub fn classify(token: &'a str) -> Self {
        if ModelFormat::is_delimiter(token) {
            Self::Delimiter
        } else {
            Literal::parse(token).map_or(Self::Empty, Self::Literal)
        }
    }
}

/// The facts of every model, in canonical (sorted) order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Datastore<'a> {
    facts: Vec<Fact<'a>>,
    models: usize,
}

impl<'a> Datastore<'a> {
    /// Normalize a stream of literal and delimiter tokens. The model
    /// index starts at 0 and increments at each delimiter, so the
    /// model count is the number of delimiters seen, whether or not
    /// the models they close had any literals.
    pub fn normalize(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut model = 0;
        let mut facts = Vec::new();
        for token in tokens {
            match Token::classify(token) {
                Token::Delimiter => model += 1,
                Token::Literal(literal) => facts.push(Fact { model, literal }),
                Token::Empty => (),
            }
        }
        facts.sort_by_cached_key(ToString::to_string);
        Self {
            facts,
            models: model,
        }
    }

    /// Normalize whitespace-separated tokens.
    pub fn from_text(text: &'a str) -> Self {
        Self::normalize(text.split_whitespace())
    }

    pub fn facts(&self) -> &[Fact<'a>] {
        &self.facts
    }

    pub fn number_of_models(&self) -> usize {
        self.models
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl fmt::Display for Datastore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fact in &self.facts {
            writeln!(f, "{fact}")?;
        }
        writeln!(f, "number_of_models({}).", self.models)
    }
}
