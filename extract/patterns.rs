//! Model block patterns, one per solver output convention.
//! Each is matched over the whole text, not line by line.

use nom::{
    bytes::complete::{tag, take_till, take_until},
    character::complete::{char, digit1, line_ending, space1},
    combinator::map,
    sequence::{delimited, preceded, tuple},
    IResult, Parser,
};

/// Where in the text a pattern may begin to match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Anchor {
    Anywhere,
    LineStart,
}

/// Collect every leftmost, non-overlapping match of `parser` in `text`.
fn find_all<'a, O, P>(text: &'a str, anchor: Anchor, mut parser: P) -> Vec<O>
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
{
    let mut found = Vec::new();
    let mut rest = text;
    let mut line_start = true;
    while !rest.is_empty() {
        if anchor == Anchor::Anywhere || line_start {
            if let Ok((next, block)) = parser.parse(rest) {
                found.push(block);
                if next.len() < rest.len() {
                    line_start = rest[..rest.len() - next.len()].ends_with('\n');
                    rest = next;
                    continue;
                }
            }
        }
        let mut chars = rest.chars();
        line_start = chars.next() == Some('\n');
        rest = chars.as_str();
    }
    found
}

/// `{a, -b, c}`: braces enclose each model, possibly across lines.
fn brace_block(input: &str) -> IResult<&str, &str> {
    delimited(char('{'), take_until("}"), char('}'))(input)
}

/// Everything up to the next `\n`, less a `\r` ending the line.
/// A lone `\r` inside the line is kept.
fn rest_of_line(input: &str) -> IResult<&str, &str> {
    map(take_till(|c: char| c == '\n'), |line: &str| {
        line.strip_suffix('\r').unwrap_or(line)
    })(input)
}

/// `Stable Model: a -b c`: a labeled line holds each model.
fn stable_model_line(input: &str) -> IResult<&str, &str> {
    preceded(tag("Stable Model:"), rest_of_line)(input)
}

/// `Answer: 1` on one line, and the model on the next.
fn numbered_answer(input: &str) -> IResult<&str, &str> {
    preceded(
        tuple((tag("Answer:"), space1, digit1, line_ending)),
        rest_of_line,
    )(input)
}

pub(crate) fn braces(text: &str) -> Vec<&str> {
    find_all(text, Anchor::Anywhere, brace_block)
}

pub(crate) fn stable_model_lines(text: &str) -> Vec<&str> {
    find_all(text, Anchor::LineStart, stable_model_line)
}

pub(crate) fn numbered_answers(text: &str) -> Vec<&str> {
    find_all(text, Anchor::Anywhere, numbered_answer)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn braces() {
        assert_eq!(super::braces(""), Vec::<&str>::new(), "empty");
        assert_eq!(super::braces("{}"), vec![""], "empty model");
        assert_eq!(super::braces("{a, -b, c.}"), vec!["a, -b, c."]);
        assert_eq!(
            super::braces("DLV [build BEN/Dec 21 2011]\n\n{p(1), q}\n{p(2), -q}\n"),
            vec!["p(1), q", "p(2), -q"],
            "one model per line"
        );
        assert_eq!(
            super::braces("{a,\n b}\n"),
            vec!["a,\n b"],
            "model spans lines"
        );
        assert_eq!(super::braces("{a, b"), Vec::<&str>::new(), "unterminated");
        assert_eq!(super::braces("{a, {b} c}"), vec!["a, {b"], "shortest match");
    }

    #[test]
    fn stable_model_lines() {
        let text = "smodels version 2.34. Reading...done\n\
                    Answer: 1\n\
                    Stable Model: q p -r \n\
                    Answer: 2\n\
                    Stable Model: s\n\
                    False\n\
                    Duration: 0.001\n";
        assert_eq!(super::stable_model_lines(text), vec![" q p -r ", " s"]);
        assert_eq!(
            super::stable_model_lines("Stable Model: a\r\nStable Model: b"),
            vec![" a", " b"],
            "CRLF and no final newline"
        );
        assert_eq!(
            super::stable_model_lines("Stable Model: a\rb\nStable Model: c\n"),
            vec![" a\rb", " c"],
            "carriage return inside a model"
        );
        assert_eq!(
            super::stable_model_lines("not a Stable Model: a\n"),
            Vec::<&str>::new(),
            "label must start the line"
        );
        assert_eq!(
            super::stable_model_lines("smodels version 2.34\nFalse\n"),
            Vec::<&str>::new(),
            "unsatisfiable"
        );
    }

    #[test]
    fn numbered_answers() {
        let text = "clasp version 1.3.4\n\
                    Reading      : Done\n\
                    Solving...\n\
                    Answer: 1\n\
                    p -q\n\
                    Answer: 2\n\
                    q\n\
                    SATISFIABLE\n";
        assert_eq!(super::numbered_answers(text), vec!["p -q", "q"]);
        assert_eq!(
            super::numbered_answers("Answer: 12\r\na b\r\n"),
            vec!["a b"],
            "CRLF"
        );
        assert_eq!(
            super::numbered_answers("Answer: 1\na\rb\n"),
            vec!["a\rb"],
            "carriage return inside a model"
        );
        assert_eq!(
            super::numbered_answers("Answer: 1\n\nAnswer: 2\nb\n"),
            vec!["", "b"],
            "empty model"
        );
        assert_eq!(
            super::numbered_answers("Answer: one\na\n"),
            Vec::<&str>::new(),
            "number required"
        );
        assert_eq!(
            super::numbered_answers("Solving...\nUNSATISFIABLE\n"),
            Vec::<&str>::new(),
            "unsatisfiable"
        );
    }
}
