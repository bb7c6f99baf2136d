//! Literals and the facts that record them.

use std::fmt;

/// Truth value asserted by a literal.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Polarity {
    Negative,
    Positive,
}

impl Polarity {
    /// The functor of a fact with this polarity.
    pub fn functor(self) -> &'static str {
        match self {
            Self::Negative => "neg",
            Self::Positive => "pos",
        }
    }
}

/// An atom, either asserted (`p`) or classically negated (`-p`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal<'a> {
    pub atom: &'a str,
    pub polarity: Polarity,
}

impl<'a> Literal<'a> {
    /// Terminators stripped from the end of a literal token.
    const TERMINATORS: [char; 2] = ['.', ','];

    /// Read a literal token, dropping any trailing terminators.
    /// A leading `-` marks a negative literal. Returns `None`
    /// if there is no atom left.
    pub fn parse(token: &'a str) -> Option<Self> {
        let token = token.trim_end_matches(&Self::TERMINATORS[..]);
        let (atom, polarity) = match token.strip_prefix('-') {
            Some(atom) => (atom, Polarity::Negative),
            None => (token, Polarity::Positive),
        };
        (!atom.is_empty()).then_some(Self { atom, polarity })
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Negative => write!(f, "-{}", self.atom),
            Polarity::Positive => f.write_str(self.atom),
        }
    }
}

/// A literal of a particular model: `pos(M,p).` or `neg(M,p).`
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fact<'a> {
    pub model: usize,
    pub literal: Literal<'a>,
}

impl fmt::Display for Fact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}).",
            self.literal.polarity.functor(),
            self.model,
            self.literal.atom
        )
    }
}

/// Wrap a literal token as a fact of the given model, without
/// its final period: `wrap("-b.", 0) == "neg(0,b)"`.
pub fn wrap(token: &str, model: usize) -> Option<String> {
    Literal::parse(token).map(|literal| {
        format!("{}({},{})", literal.polarity.functor(), model, literal.atom)
    })
}
